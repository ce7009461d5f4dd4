use strand_models::gateway::GatewayMessage;
use tokio::sync::mpsc;

/// Receiving end of the gateway queue. Frames arrive in submission order.
#[derive(Debug)]
pub struct GatewayOutbox {
    rx: mpsc::UnboundedReceiver<GatewayMessage>,
}

impl GatewayOutbox {
    pub(crate) fn channel() -> (mpsc::UnboundedSender<GatewayMessage>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }

    /// Waits for the next frame; `None` once every transport is dropped.
    pub async fn recv(&mut self) -> Option<GatewayMessage> {
        self.rx.recv().await
    }

    pub fn try_recv(&mut self) -> Option<GatewayMessage> {
        self.rx.try_recv().ok()
    }
}
