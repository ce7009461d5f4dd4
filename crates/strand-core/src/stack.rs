use crate::messages::{Messages, MessagesLayer};
use crate::status::{Status, StatusLayer};
use crate::trace::{TraceLayer, Traced};
use crate::Transport;

/// Wraps one layer around the stack built so far.
///
/// A third-party plugin is a struct generic over its inner layer that
/// implements [`Transport`] and forwards the capability traits it does not
/// provide itself, e.g. `impl<B: Messaging> Messaging for MyPlugin<B> {}`.
pub trait Layer<B: Transport> {
    type Stacked: Transport;

    fn stack(self, inner: B) -> Self::Stacked;
}

/// Assembles a stack bottom-up, starting from the transport.
#[derive(Debug, Clone)]
pub struct StackBuilder<B> {
    inner: B,
}

impl<B: Transport> StackBuilder<B> {
    pub fn new(transport: B) -> Self {
        Self { inner: transport }
    }

    pub fn layer<L: Layer<B>>(self, layer: L) -> StackBuilder<L::Stacked> {
        StackBuilder {
            inner: layer.stack(self.inner),
        }
    }

    pub fn build(self) -> B {
        self.inner
    }
}

/// The standard client: tracing closest to the transport, then messaging,
/// then presence.
pub type Client<T> = Status<Messages<Traced<T>>>;

pub fn client<T: Transport>(transport: T) -> Client<T> {
    StackBuilder::new(transport)
        .layer(TraceLayer)
        .layer(MessagesLayer)
        .layer(StatusLayer)
        .build()
}
