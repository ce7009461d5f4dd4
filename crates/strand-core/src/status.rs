use strand_models::gateway::OP_PRESENCE_UPDATE;
use strand_models::{Payload, PresenceStatus};

use crate::messages::Messages;
use crate::stack::Layer;
use crate::trace::Traced;
use crate::{AckCallback, StackError, Transport};

/// Presence operations over the gateway.
pub trait Presence: Transport {
    /// Broadcast `status` as a presence update (opcode 3).
    fn set_status(
        &self,
        status: &PresenceStatus,
        callback: Option<AckCallback>,
    ) -> Result<(), StackError> {
        self.send(OP_PRESENCE_UPDATE, status.to_json()?, callback);
        Ok(())
    }
}

/// Plugin layer providing [`Presence`].
#[derive(Debug, Clone, Default)]
pub struct Status<B> {
    inner: B,
}

impl<B> Status<B> {
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

crate::delegate_transport!(Status);

impl<B: Transport> Presence for Status<B> {}
impl<B: Presence> Presence for Messages<B> {}
impl<B: Presence> Presence for Traced<B> {}

#[derive(Debug, Clone, Copy, Default)]
pub struct StatusLayer;

impl<B: Transport> Layer<B> for StatusLayer {
    type Stacked = Status<B>;

    fn stack(self, inner: B) -> Status<B> {
        Status::new(inner)
    }
}
