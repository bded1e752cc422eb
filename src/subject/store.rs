//! Subject implementation
//!
//! Holds the current value and the subscriber list, and drives the
//! synchronous notification loop.

use std::cell::Cell;

use crate::stats::SubjectStats;

use super::config::SubjectConfig;
use super::error::NotifyError;
use super::subscriber::Subscriber;

/// Owner of a string value and the subscribers that follow it
///
/// Subscribers are borrowed for `'a`; the caller keeps ownership and the
/// subject never outlives them. The counters live in `Cell`s so `notify`
/// can run through `&self`, which also makes `Subject` `!Sync`.
pub struct Subject<'a> {
    /// Most recent value passed to `set_state`
    state: String,

    /// Registration order, duplicates allowed
    subscribers: Vec<&'a dyn Subscriber>,

    /// Configuration
    config: SubjectConfig,

    updates: Cell<u64>,
    rounds: Cell<u64>,
    deliveries: Cell<u64>,
    failed_rounds: Cell<u64>,
}

impl<'a> Subject<'a> {
    /// Create a subject with default configuration
    pub fn new(initial: impl Into<String>) -> Self {
        Self::with_config(initial, SubjectConfig::default())
    }

    /// Create a subject with custom configuration
    pub fn with_config(initial: impl Into<String>, config: SubjectConfig) -> Self {
        Self {
            state: initial.into(),
            subscribers: Vec::with_capacity(config.subscriber_capacity),
            config,
            updates: Cell::new(0),
            rounds: Cell::new(0),
            deliveries: Cell::new(0),
            failed_rounds: Cell::new(0),
        }
    }

    /// Get the subject configuration
    pub fn config(&self) -> &SubjectConfig {
        &self.config
    }

    /// Current value
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Number of registrations, duplicates included
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Append a subscriber
    ///
    /// The same subscriber may be registered repeatedly; it is then
    /// notified once per registration.
    pub fn register(&mut self, subscriber: &'a dyn Subscriber) {
        self.subscribers.push(subscriber);

        tracing::debug!(
            subject = %self.config.name,
            position = self.subscribers.len() - 1,
            "Subscriber registered"
        );
    }

    /// Replace the value and notify every subscriber
    ///
    /// The new value is stored before delivery starts, so it sticks even
    /// when a subscriber fails. Setting the current value again still runs
    /// a full round.
    pub fn set_state(&mut self, value: impl Into<String>) -> Result<(), NotifyError> {
        self.state = value.into();
        self.updates.set(self.updates.get() + 1);

        tracing::debug!(
            subject = %self.config.name,
            subscribers = self.subscribers.len(),
            "State updated"
        );

        self.notify()
    }

    /// Deliver the current value to every subscriber in registration order
    ///
    /// Stops at the first subscriber that returns an error.
    pub fn notify(&self) -> Result<(), NotifyError> {
        self.rounds.set(self.rounds.get() + 1);

        for (position, subscriber) in self.subscribers.iter().enumerate() {
            if let Err(source) = subscriber.receive(&self.state) {
                self.failed_rounds.set(self.failed_rounds.get() + 1);

                tracing::warn!(
                    subject = %self.config.name,
                    position = position,
                    skipped = self.subscribers.len() - position - 1,
                    error = %source,
                    "Delivery failed, notification round aborted"
                );
                return Err(NotifyError { position, source });
            }

            self.deliveries.set(self.deliveries.get() + 1);
            tracing::trace!(subject = %self.config.name, position = position, "Delivered");
        }

        Ok(())
    }

    /// Snapshot of delivery statistics
    pub fn stats(&self) -> SubjectStats {
        SubjectStats {
            subscriber_count: self.subscribers.len(),
            updates: self.updates.get(),
            rounds: self.rounds.get(),
            deliveries: self.deliveries.get(),
            failed_rounds: self.failed_rounds.get(),
        }
    }
}

impl std::fmt::Debug for Subject<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subject")
            .field("name", &self.config.name)
            .field("state", &self.state)
            .field("subscriber_count", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subject::error::SubscriberError;
    use std::cell::RefCell;
    use tokio_test::{assert_err, assert_ok};

    /// Writes "<tag>:<value>" into a shared journal so cross-subscriber
    /// ordering can be checked
    struct Tagged<'j> {
        tag: &'static str,
        journal: &'j RefCell<Vec<String>>,
    }

    impl<'j> Tagged<'j> {
        fn new(tag: &'static str, journal: &'j RefCell<Vec<String>>) -> Self {
            Self { tag, journal }
        }
    }

    impl Subscriber for Tagged<'_> {
        fn receive(&self, value: &str) -> Result<(), SubscriberError> {
            self.journal
                .borrow_mut()
                .push(format!("{}:{}", self.tag, value));
            Ok(())
        }
    }

    struct Refuse;

    impl Subscriber for Refuse {
        fn receive(&self, value: &str) -> Result<(), SubscriberError> {
            Err(SubscriberError::Rejected(value.to_string()))
        }
    }

    #[test]
    fn test_new_subject() {
        let subject = Subject::new("Breaking: none");

        assert_eq!(subject.state(), "Breaking: none");
        assert_eq!(subject.subscriber_count(), 0);
        assert_eq!(subject.config(), &SubjectConfig::default());
    }

    #[test]
    fn test_registration_order() {
        let journal = RefCell::new(Vec::new());
        let a = Tagged::new("a", &journal);
        let b = Tagged::new("b", &journal);
        let c = Tagged::new("c", &journal);

        let mut subject = Subject::new("init");
        subject.register(&a);
        subject.register(&b);
        subject.register(&c);

        assert_ok!(subject.set_state("v"));

        assert_eq!(*journal.borrow(), vec!["a:v", "b:v", "c:v"]);
    }

    #[test]
    fn test_duplicate_registration() {
        let journal = RefCell::new(Vec::new());
        let a = Tagged::new("a", &journal);

        let mut subject = Subject::new("init");
        subject.register(&a);
        subject.register(&a);

        assert_ok!(subject.set_state("X"));

        assert_eq!(subject.subscriber_count(), 2);
        assert_eq!(*journal.borrow(), vec!["a:X", "a:X"]);
    }

    #[test]
    fn test_same_value_still_notifies() {
        let journal = RefCell::new(Vec::new());
        let a = Tagged::new("a", &journal);

        let mut subject = Subject::new("same");
        subject.register(&a);

        assert_ok!(subject.set_state("same"));
        assert_ok!(subject.set_state("same"));

        assert_eq!(journal.borrow().len(), 2);
    }

    #[test]
    fn test_no_subscribers() {
        let mut subject = Subject::new("init");

        assert_ok!(subject.set_state("Y"));
        assert_ok!(subject.set_state("Y"));

        assert_eq!(subject.state(), "Y");
        assert_eq!(subject.stats().deliveries, 0);
    }

    #[test]
    fn test_notify_redelivers_current_state() {
        let journal = RefCell::new(Vec::new());
        let a = Tagged::new("a", &journal);

        let mut subject = Subject::new("current");
        subject.register(&a);

        assert_ok!(subject.notify());

        assert_eq!(subject.state(), "current");
        assert_eq!(*journal.borrow(), vec!["a:current"]);
        assert_eq!(subject.stats().updates, 0);
    }

    #[test]
    fn test_fail_fast() {
        let journal = RefCell::new(Vec::new());
        let first = Tagged::new("first", &journal);
        let last = Tagged::new("last", &journal);

        let mut subject = Subject::new("init");
        subject.register(&first);
        subject.register(&Refuse);
        subject.register(&last);

        let err = assert_err!(subject.set_state("bad news"));

        assert_eq!(err.position, 1);
        assert!(matches!(err.source, SubscriberError::Rejected(ref v) if v == "bad news"));
        // State sticks even though delivery was cut short
        assert_eq!(subject.state(), "bad news");
        assert_eq!(*journal.borrow(), vec!["first:bad news"]);
    }

    #[test]
    fn test_stats() {
        let journal = RefCell::new(Vec::new());
        let a = Tagged::new("a", &journal);

        let mut subject = Subject::new("init");
        subject.register(&a);
        subject.register(&a);
        assert_ok!(subject.set_state("one"));
        assert_ok!(subject.set_state("two"));
        subject.register(&Refuse);
        assert_err!(subject.set_state("three"));

        let stats = subject.stats();
        assert_eq!(stats.subscriber_count, 3);
        assert_eq!(stats.updates, 3);
        assert_eq!(stats.rounds, 3);
        assert_eq!(stats.deliveries, 6);
        assert_eq!(stats.failed_rounds, 1);
    }

    #[test]
    fn test_stats_count_direct_notify_rounds() {
        let journal = RefCell::new(Vec::new());
        let a = Tagged::new("a", &journal);

        let mut subject = Subject::new("x");
        subject.register(&a);
        assert_ok!(subject.notify());
        assert_ok!(subject.notify());
        assert_ok!(subject.set_state("y"));

        let stats = subject.stats();
        assert_eq!(stats.updates, 1);
        assert_eq!(stats.rounds, 3);
        assert_eq!(stats.deliveries, 3);
        assert_eq!(stats.fan_out(), 1.0);
    }

    #[test]
    fn test_with_config() {
        let config = SubjectConfig::named("wire").subscriber_capacity(16);
        let subject = Subject::with_config("", config);

        assert_eq!(subject.config().name, "wire");
        assert_eq!(subject.state(), "");
        assert!(format!("{:?}", subject).contains("wire"));
    }
}
