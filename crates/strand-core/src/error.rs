use thiserror::Error;

/// Failures raised before a request reaches the transport. Anything that
/// goes wrong after hand-off is relayed to the caller's callback instead.
#[derive(Debug, Error)]
pub enum StackError {
    #[error("payload encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}
