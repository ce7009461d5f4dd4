use serde_json::Value;
use tracing::debug;

use crate::stack::Layer;
use crate::{AckCallback, ResponseCallback, RestRequest, Transport};

/// Logs every primitive that passes through, then hands it down unchanged.
#[derive(Debug, Clone, Default)]
pub struct Traced<B> {
    inner: B,
}

impl<B> Traced<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }

    pub fn into_inner(self) -> B {
        self.inner
    }
}

impl<B: Transport> Transport for Traced<B> {
    fn call(&self, request: RestRequest, callback: Option<ResponseCallback>) {
        debug!(
            method = %request.method,
            path = %request.path,
            has_body = request.body.is_some(),
            "submitting REST request"
        );
        self.inner.call(request, callback)
    }

    fn send(&self, opcode: u8, payload: Value, callback: Option<AckCallback>) {
        debug!(opcode, "submitting gateway payload");
        self.inner.send(opcode, payload, callback)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TraceLayer;

impl<B: Transport> Layer<B> for TraceLayer {
    type Stacked = Traced<B>;

    fn stack(self, inner: B) -> Traced<B> {
        Traced::new(inner)
    }
}
