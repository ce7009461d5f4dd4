use serde::Serialize;
use serde_json::Value;

pub const OP_PRESENCE_UPDATE: u8 = 3;

/// Outbound gateway frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GatewayMessage {
    pub op: u8,
    pub d: Value,
}

impl GatewayMessage {
    pub fn outbound(op: u8, payload: Value) -> Self {
        Self { op, d: payload }
    }
}
