use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Url};
use serde_json::Value;
use strand_core::{
    acknowledge, respond, AckCallback, Method, ResponseCallback, RestRequest, Transport,
};
use strand_models::gateway::GatewayMessage;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::TransportError;
use crate::outbox::GatewayOutbox;

/// REST over reqwest, gateway sends onto a queue.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    base_url: String,
    authorization: String,
    runtime: Handle,
    outbox: mpsc::UnboundedSender<GatewayMessage>,
}

impl HttpTransport {
    /// Calls are spawned on `runtime`; the returned outbox yields every
    /// gateway frame submitted through this transport or its clones.
    ///
    /// Fails on a base URL that is not an absolute http(s) URL with a host,
    /// and on a zero timeout.
    pub fn new(
        config: &ApiConfig,
        runtime: Handle,
    ) -> Result<(Self, GatewayOutbox), TransportError> {
        let base_url = config.base_url.trim_end_matches('/');
        let parsed = Url::parse(base_url)
            .map_err(|_| TransportError::InvalidBaseUrl(config.base_url.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(TransportError::InvalidBaseUrl(config.base_url.clone()));
        }
        if config.timeout_secs == 0 {
            return Err(TransportError::InvalidTimeout);
        }

        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(format!("strand/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        let (outbox, rx) = GatewayOutbox::channel();
        let transport = Self {
            http,
            base_url: base_url.to_string(),
            authorization: format!("Bot {}", config.bare_token()),
            runtime,
            outbox,
        };
        Ok((transport, rx))
    }

    async fn execute(
        http: Client,
        url: String,
        authorization: String,
        request: RestRequest,
    ) -> Result<Value, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut req = http.request(method, &url).header(AUTHORIZATION, authorization);
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            // Proxies answer with HTML or plain text; keep it as a string.
            let body = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                    Value::String(String::from_utf8_lossy(&bytes).into_owned())
                })
            };
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        if bytes.is_empty() {
            Ok(Value::Null)
        } else {
            Ok(serde_json::from_slice(&bytes)?)
        }
    }
}

impl Transport for HttpTransport {
    fn call(&self, request: RestRequest, callback: Option<ResponseCallback>) {
        debug!(method = %request.method, path = %request.path, "dispatching REST request");

        let url = format!("{}{}", self.base_url, request.path);
        let method = request.method;
        let path = request.path.clone();
        let task = Self::execute(
            self.http.clone(),
            url,
            self.authorization.clone(),
            request,
        );

        self.runtime.spawn(async move {
            let body = match task.await {
                Ok(body) => body,
                Err(err) => {
                    warn!(
                        %method,
                        %path,
                        status = ?err.status(),
                        error = %err,
                        "REST request failed"
                    );
                    err.to_body()
                }
            };
            respond(callback, body);
        });
    }

    fn send(&self, opcode: u8, payload: Value, callback: Option<AckCallback>) {
        match self.outbox.send(GatewayMessage::outbound(opcode, payload)) {
            Ok(()) => {
                debug!(opcode, "queued gateway payload");
                acknowledge(callback);
            }
            Err(_) => warn!(opcode, "gateway outbox closed, dropping payload"),
        }
    }
}
