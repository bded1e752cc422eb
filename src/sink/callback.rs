//! Closure adapter

use crate::subject::{Subscriber, SubscriberError};

/// Subscriber backed by a closure
pub struct FnSubscriber<F> {
    f: F,
}

impl<F> FnSubscriber<F>
where
    F: Fn(&str) -> Result<(), SubscriberError>,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Subscriber for FnSubscriber<F>
where
    F: Fn(&str) -> Result<(), SubscriberError>,
{
    fn receive(&self, value: &str) -> Result<(), SubscriberError> {
        (self.f)(value)
    }
}

/// Turn a closure into a subscriber
pub fn subscriber_fn<F>(f: F) -> FnSubscriber<F>
where
    F: Fn(&str) -> Result<(), SubscriberError>,
{
    FnSubscriber::new(f)
}
