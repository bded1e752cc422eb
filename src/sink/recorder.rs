//! In-memory value log

use std::cell::RefCell;

use crate::subject::{Subscriber, SubscriberError};

/// Subscriber that keeps every value it receives, in arrival order
#[derive(Debug, Default)]
pub struct Recorder {
    log: RefCell<Vec<String>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything received so far
    pub fn values(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    /// Most recent value, if any
    pub fn last(&self) -> Option<String> {
        self.log.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.borrow().is_empty()
    }
}

impl Subscriber for Recorder {
    fn receive(&self, value: &str) -> Result<(), SubscriberError> {
        self.log.borrow_mut().push(value.to_string());
        Ok(())
    }
}
