use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::speech::ControlRequest;

/// Live connection state stored by a session: the control channel to the
/// provider plus the event-forwarding task. At most one exists per session
/// instance at any time.
pub(crate) struct ActiveConnection {
    pub control: mpsc::Sender<ControlRequest>,
    pub forward_task: JoinHandle<()>,
}

impl ActiveConnection {
    /// Issue a control request and tear down event forwarding.
    ///
    /// The request is best-effort; the provider releases the underlying
    /// connection asynchronously after this returns. Aborting the forwarding
    /// task guarantees no further events reach the session's callbacks.
    pub(crate) async fn release(self, request: ControlRequest) {
        if self.control.send(request).await.is_err() {
            warn!("Speech connection already closed");
        }
        self.forward_task.abort();
    }
}
