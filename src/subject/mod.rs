//! Subject and subscriber registry
//!
//! A [`Subject`] owns one string value and an ordered list of borrowed
//! subscribers. Every state change is pushed to each subscriber in turn,
//! synchronously, on the caller's thread.
//!
//! # Architecture
//!
//! ```text
//!                         Subject<'a>
//!                  ┌──────────────────────────┐
//!                  │ state: String            │
//!                  │ subscribers: Vec<        │
//!                  │   &'a dyn Subscriber     │
//!                  │ >                        │
//!                  └────────────┬─────────────┘
//!                               │ set_state() ──► notify()
//!         ┌─────────────────────┼─────────────────────┐
//!         │                     │                     │
//!         ▼                     ▼                     ▼
//!    [Subscriber 0]       [Subscriber 1]        [Subscriber n]
//!    receive(&state)      receive(&state)       receive(&state)
//! ```
//!
//! # Delivery
//!
//! Delivery is fail-fast: the first subscriber that returns an error ends
//! the round, and the error reports its position in registration order.
//! Subscribers cannot be removed once registered; they are released when
//! the subject is dropped.

pub mod config;
pub mod error;
pub mod store;
pub mod subscriber;

pub use config::SubjectConfig;
pub use error::{NotifyError, SubscriberError};
pub use store::Subject;
pub use subscriber::Subscriber;
