//! Subscriber capability
//!
//! Anything that can take a delivered value implements [`Subscriber`].
//! The subject only ever sees `&dyn Subscriber`.

use std::rc::Rc;
use std::sync::Arc;

use super::error::SubscriberError;

/// Receiver of state notifications
///
/// `receive` takes `&self`: a subscriber may be registered more than once
/// and stays readable by its owner, so stateful subscribers use interior
/// mutability.
pub trait Subscriber {
    /// Accept a newly published value
    fn receive(&self, value: &str) -> Result<(), SubscriberError>;
}

impl<T: Subscriber + ?Sized> Subscriber for &T {
    fn receive(&self, value: &str) -> Result<(), SubscriberError> {
        (**self).receive(value)
    }
}

impl<T: Subscriber + ?Sized> Subscriber for Box<T> {
    fn receive(&self, value: &str) -> Result<(), SubscriberError> {
        (**self).receive(value)
    }
}

impl<T: Subscriber + ?Sized> Subscriber for Rc<T> {
    fn receive(&self, value: &str) -> Result<(), SubscriberError> {
        (**self).receive(value)
    }
}

impl<T: Subscriber + ?Sized> Subscriber for Arc<T> {
    fn receive(&self, value: &str) -> Result<(), SubscriberError> {
        (**self).receive(value)
    }
}
