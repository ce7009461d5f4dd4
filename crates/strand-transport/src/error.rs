use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("timeout must be at least one second")]
    InvalidTimeout,
    #[error("remote returned {status}")]
    Status { status: u16, body: Value },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TransportError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Status { status, .. } => Some(*status),
            Self::InvalidBaseUrl(_) | Self::InvalidTimeout | Self::Decode(_) => None,
        }
    }

    /// Error-shaped body handed to REST callbacks in place of a response.
    pub fn to_body(&self) -> Value {
        let remote = match self {
            Self::Status { body, .. } => body.clone(),
            _ => Value::Null,
        };
        let message = remote
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| self.to_string());
        json!({
            "error": {
                "status": self.status(),
                "message": message,
                "body": remote,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_remote_message() {
        let err = TransportError::Status {
            status: 403,
            body: json!({"code": 50001, "message": "Missing Access"}),
        };
        assert_eq!(
            err.to_body(),
            json!({
                "error": {
                    "status": 403,
                    "message": "Missing Access",
                    "body": {"code": 50001, "message": "Missing Access"},
                }
            })
        );
    }

    #[test]
    fn local_errors_have_no_status() {
        let err = TransportError::InvalidBaseUrl("ftp://x".into());
        let body = err.to_body();
        assert!(body["error"]["status"].is_null());
        assert_eq!(body["error"]["message"], "invalid base url: ftp://x");
    }

    #[test]
    fn non_json_remote_body_falls_back_to_status_message() {
        let err = TransportError::Status {
            status: 502,
            body: Value::String("<html>Bad Gateway</html>".into()),
        };
        let body = err.to_body();
        assert_eq!(body["error"]["status"], 502);
        assert_eq!(body["error"]["message"], "remote returned 502");
        assert_eq!(body["error"]["body"], "<html>Bad Gateway</html>");
    }
}
