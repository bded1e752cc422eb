//! Ready-made subscribers
//!
//! Provides subscribers for the common cases:
//! - Recording every value into an in-memory log
//! - Printing values to a writer
//! - Forwarding values into a tokio channel for async consumers
//! - Wrapping a closure

pub mod callback;
pub mod forwarder;
pub mod printer;
pub mod recorder;

pub use callback::{subscriber_fn, FnSubscriber};
pub use forwarder::Forwarder;
pub use printer::Printer;
pub use recorder::Recorder;
