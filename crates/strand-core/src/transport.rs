use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Completion for a REST call, invoked with the decoded response body.
pub type ResponseCallback = Box<dyn FnOnce(Value) + Send + 'static>;

/// Completion for a gateway send, invoked once the payload is accepted.
pub type AckCallback = Box<dyn FnOnce() + Send + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One REST request, path relative to the API base.
#[derive(Debug, Clone, PartialEq)]
pub struct RestRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl RestRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// The root of every capability stack.
///
/// Implementations own all I/O and scheduling. Callbacks are optional; a
/// missing callback means "do nothing on completion". Use [`respond`] and
/// [`acknowledge`] to honour that default.
pub trait Transport {
    /// Submit one REST request.
    fn call(&self, request: RestRequest, callback: Option<ResponseCallback>);

    /// Submit one gateway payload under `opcode`.
    fn send(&self, opcode: u8, payload: Value, callback: Option<AckCallback>);
}

/// Deliver a response body, or drop it when no callback was given.
pub fn respond(callback: Option<ResponseCallback>, body: Value) {
    if let Some(callback) = callback {
        callback(body);
    }
}

/// Fire an acknowledgement, or do nothing when no callback was given.
pub fn acknowledge(callback: Option<AckCallback>) {
    if let Some(callback) = callback {
        callback();
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn call(&self, request: RestRequest, callback: Option<ResponseCallback>) {
        (**self).call(request, callback)
    }

    fn send(&self, opcode: u8, payload: Value, callback: Option<AckCallback>) {
        (**self).send(opcode, payload, callback)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn call(&self, request: RestRequest, callback: Option<ResponseCallback>) {
        (**self).call(request, callback)
    }

    fn send(&self, opcode: u8, payload: Value, callback: Option<AckCallback>) {
        (**self).send(opcode, payload, callback)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn call(&self, request: RestRequest, callback: Option<ResponseCallback>) {
        (**self).call(request, callback)
    }

    fn send(&self, opcode: u8, payload: Value, callback: Option<AckCallback>) {
        (**self).send(opcode, payload, callback)
    }
}
