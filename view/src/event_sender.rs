use tokio::sync::mpsc::UnboundedSender;

use crate::event::QuestionEvent;

/// Cloneable handle a question view uses to signal its host.
#[derive(Clone, Debug)]
pub struct QuestionEventSender {
    tx: UnboundedSender<QuestionEvent>,
}

impl QuestionEventSender {
    pub fn new(tx: UnboundedSender<QuestionEvent>) -> Self {
        Self { tx }
    }

    /// Send an event to the host. Never blocks; if the host has dropped its
    /// receiver the event is dropped and an error is logged.
    pub fn send(&self, event: QuestionEvent) {
        if let Err(e) = self.tx.send(event) {
            tracing::error!("failed to send question event: {e}");
        }
    }
}
