//! Network-backed [`Transport`](strand_core::Transport) for the strand client.
//!
//! REST calls run on a tokio runtime and report back through their callback.
//! Gateway payloads are framed and queued on a [`GatewayOutbox`] for whoever
//! owns the websocket connection.

pub mod config;
pub mod error;
pub mod http;
pub mod outbox;

pub use config::ApiConfig;
pub use error::TransportError;
pub use http::HttpTransport;
pub use outbox::GatewayOutbox;
