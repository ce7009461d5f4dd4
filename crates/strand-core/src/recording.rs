//! A transport that records instead of performing I/O.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use crate::{acknowledge, respond, AckCallback, ResponseCallback, RestRequest, Transport};

#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Call(RestRequest),
    Send { opcode: u8, payload: Value },
}

/// Clones share one log, so a test can keep a handle while the stack owns
/// another. REST callbacks get the canned response (`null` by default) and
/// gateway callbacks fire immediately.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    log: Arc<Mutex<Vec<Recorded>>>,
    response: Value,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(response: Value) -> Self {
        Self {
            log: Arc::default(),
            response,
        }
    }

    pub fn recorded(&self) -> Vec<Recorded> {
        self.lock().clone()
    }

    pub fn calls(&self) -> Vec<RestRequest> {
        self.lock()
            .iter()
            .filter_map(|entry| match entry {
                Recorded::Call(request) => Some(request.clone()),
                Recorded::Send { .. } => None,
            })
            .collect()
    }

    pub fn sends(&self) -> Vec<(u8, Value)> {
        self.lock()
            .iter()
            .filter_map(|entry| match entry {
                Recorded::Send { opcode, payload } => Some((*opcode, payload.clone())),
                Recorded::Call(_) => None,
            })
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Recorded>> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Transport for RecordingTransport {
    fn call(&self, request: RestRequest, callback: Option<ResponseCallback>) {
        self.lock().push(Recorded::Call(request));
        respond(callback, self.response.clone());
    }

    fn send(&self, opcode: u8, payload: Value, callback: Option<AckCallback>) {
        self.lock().push(Recorded::Send { opcode, payload });
        acknowledge(callback);
    }
}
