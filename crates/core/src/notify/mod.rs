//! Status notifications for the engine's single subscriber.

use tokio::sync::mpsc;
use tracing::warn;

/// One parked message at most; publishers wait beyond that.
const CHANNEL_CAPACITY: usize = 1;

/// Sends short human-readable status lines to the engine's subscriber.
///
/// Cheaply cloneable and shareable across tasks. The channel is bounded at
/// capacity 1: a publish completes only while the subscriber keeps
/// receiving, and suspends once a message is parked. A publisher with no
/// live subscriber therefore waits instead of queueing unboundedly; that
/// backpressure is intentional. If the receiving side has been dropped the
/// message is discarded with a warning.
#[derive(Clone)]
pub struct Notifier {
    tx: mpsc::Sender<String>,
}

impl Notifier {
    /// Creates the notifier together with its single subscription stream.
    pub fn channel() -> (Self, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        (Self { tx }, rx)
    }

    /// Publishes one status line, waiting until the subscriber has room.
    pub async fn publish(&self, message: impl Into<String>) {
        if let Err(e) = self.tx.send(message.into()).await {
            warn!("notification dropped, subscriber is gone: {}", e);
        }
    }

    /// Publishes without waiting.
    ///
    /// Returns `false` when the channel is full or the subscriber is gone.
    pub fn try_publish(&self, message: impl Into<String>) -> bool {
        match self.tx.try_send(message.into()) {
            Ok(()) => true,
            Err(e) => {
                warn!("notification not delivered: {}", e);
                false
            }
        }
    }
}
