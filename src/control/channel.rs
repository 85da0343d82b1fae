//! Outbound side of the control channel

use tokio::sync::mpsc;

/// Clonable handle for queueing outbound control-channel lines.
///
/// Sends are fire-and-forget: when the remote terminal is gone or slow the
/// queue fills and lines are dropped rather than stalling the control loop.
#[derive(Clone)]
pub struct ControlSender {
    tx: mpsc::Sender<String>,
}

impl ControlSender {
    pub fn new(tx: mpsc::Sender<String>) -> Self {
        Self { tx }
    }

    pub fn send(&self, line: impl Into<String>) {
        let _ = self.tx.try_send(line.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_queues_line() {
        let (tx, mut rx) = mpsc::channel(4);
        let sender = ControlSender::new(tx);
        sender.send("hello");
        assert_eq!(rx.recv().await.unwrap(), "hello");
    }

    #[test]
    fn test_send_drops_when_full() {
        let (tx, _rx) = mpsc::channel(1);
        let sender = ControlSender::new(tx);
        sender.send("first");
        sender.send("second"); // queue full, dropped silently
    }
}
