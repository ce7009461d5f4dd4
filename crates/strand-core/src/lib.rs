//! Capability stack for the strand bot client.
//!
//! A client is a chain of plugin layers over a [`Transport`]. Each layer is
//! generic over the layer beneath it, implements [`Transport`] itself and
//! adds named operations through a capability trait ([`Messaging`],
//! [`Presence`]). Capability operations are provided methods written against
//! the transport primitives of the whole stack, so an outer layer that
//! overrides `call` or `send` sees every request regardless of which layer
//! issued it. Everything resolves statically; nothing is registered at run
//! time.
//!
//! ```
//! use strand_core::{client, recording::RecordingTransport, Messaging};
//!
//! let transport = RecordingTransport::new();
//! let bot = client(transport.clone());
//! bot.send_message("123", "hello", None, None).unwrap();
//! assert_eq!(transport.calls()[0].path, "/channels/123/messages");
//! ```

/// Implements [`Transport`] for a layer by handing both primitives to `inner`.
macro_rules! delegate_transport {
    ($layer:ident) => {
        impl<B: $crate::Transport> $crate::Transport for $layer<B> {
            fn call(
                &self,
                request: $crate::RestRequest,
                callback: Option<$crate::ResponseCallback>,
            ) {
                self.inner.call(request, callback)
            }

            fn send(
                &self,
                opcode: u8,
                payload: serde_json::Value,
                callback: Option<$crate::AckCallback>,
            ) {
                self.inner.send(opcode, payload, callback)
            }
        }
    };
}

pub(crate) use delegate_transport;

pub mod error;
pub mod messages;
pub mod recording;
pub mod stack;
pub mod status;
pub mod trace;
pub mod transport;

pub use error::StackError;
pub use messages::{Messages, MessagesLayer, Messaging};
pub use stack::{client, Client, Layer, StackBuilder};
pub use status::{Presence, Status, StatusLayer};
pub use trace::{TraceLayer, Traced};
pub use transport::{
    acknowledge, respond, AckCallback, Method, ResponseCallback, RestRequest, Transport,
};
