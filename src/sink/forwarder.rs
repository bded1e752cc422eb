//! Channel forwarding subscriber
//!
//! Bridges the synchronous notification loop to async code: each value is
//! pushed into an unbounded tokio channel without blocking, and a task on
//! the other end consumes it at its own pace.

use tokio::sync::mpsc;

use crate::subject::{Subscriber, SubscriberError};

/// Subscriber that forwards values into a tokio channel
#[derive(Debug, Clone)]
pub struct Forwarder {
    tx: mpsc::UnboundedSender<String>,
}

impl Forwarder {
    /// Wrap an existing sender
    pub fn new(tx: mpsc::UnboundedSender<String>) -> Self {
        Self { tx }
    }

    /// Create a forwarder and the receiver it feeds
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    /// Whether the receiving half has been dropped
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl Subscriber for Forwarder {
    fn receive(&self, value: &str) -> Result<(), SubscriberError> {
        self.tx
            .send(value.to_string())
            .map_err(|_| SubscriberError::Closed)
    }
}
