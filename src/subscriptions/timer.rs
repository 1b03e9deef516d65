use crate::handlers::Message;
use shout_util::{BannerEvent, BannerId, DeadlineTimer};
use std::time::Duration;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;

/// Auto-dismiss deadline backed by a tokio sleep.
///
/// Only one deadline exists at a time; scheduling a new one aborts the old.
pub struct TokioTimer {
    tx: Sender<Message>,
    pending: Option<(BannerId, JoinHandle<()>)>,
}

impl TokioTimer {
    pub fn new(tx: Sender<Message>) -> Self {
        Self { tx, pending: None }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|(_, handle)| !handle.is_finished())
    }
}

impl DeadlineTimer for TokioTimer {
    fn schedule(&mut self, id: BannerId, after: Duration) {
        if let Some((old, handle)) = self.pending.take() {
            tracing::trace!("replacing deadline for {old}");
            handle.abort();
        }

        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            if let Err(err) = tx.send(Message::Banner(BannerEvent::TimerFired(id))).await {
                tracing::error!("Failed to deliver deadline for {id}: {:?}", err);
            }
        });
        self.pending = Some((id, handle));
    }

    fn cancel(&mut self, id: BannerId) {
        match self.pending.take() {
            Some((pending, handle)) if pending == id => handle.abort(),
            other => self.pending = other,
        }
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        if let Some((_, handle)) = self.pending.take() {
            handle.abort();
        }
    }
}
