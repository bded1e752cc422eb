//! Notification error types
//!
//! Errors raised by subscribers and by the subject's delivery loop.

use std::io;

/// Error returned by a subscriber that could not accept a value
#[derive(Debug)]
pub enum SubscriberError {
    /// Downstream receiver is gone
    Closed,
    /// Writing the value out failed
    Io(io::Error),
    /// Subscriber refused the value
    Rejected(String),
}

impl std::fmt::Display for SubscriberError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriberError::Closed => write!(f, "Subscriber channel closed"),
            SubscriberError::Io(err) => write!(f, "Subscriber I/O error: {}", err),
            SubscriberError::Rejected(reason) => write!(f, "Value rejected: {}", reason),
        }
    }
}

impl std::error::Error for SubscriberError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubscriberError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SubscriberError {
    fn from(err: io::Error) -> Self {
        SubscriberError::Io(err)
    }
}

/// A notification round stopped at a failing subscriber
///
/// Subscribers before `position` already received the value; those after
/// it were not called.
#[derive(Debug)]
pub struct NotifyError {
    /// Index of the failing subscriber in registration order
    pub position: usize,
    /// What the subscriber reported
    pub source: SubscriberError,
}

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Notification stopped at subscriber {}: {}",
            self.position, self.source
        )
    }
}

impl std::error::Error for NotifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
