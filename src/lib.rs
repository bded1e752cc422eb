//! Synchronous publish/notify
//!
//! A [`Subject`] holds a string value and an ordered list of
//! [`Subscriber`]s. Changing the value delivers it to every subscriber, in
//! registration order, before `set_state` returns.
//!
//! ```
//! use herald::{Recorder, Subject};
//!
//! let a = Recorder::new();
//! let b = Recorder::new();
//!
//! let mut subject = Subject::new("Breaking: none");
//! subject.register(&a);
//! subject.register(&b);
//! subject.set_state("Election results in")?;
//!
//! assert_eq!(a.values(), vec!["Election results in"]);
//! assert_eq!(b.values(), vec!["Election results in"]);
//! # Ok::<(), herald::NotifyError>(())
//! ```

pub mod sink;
pub mod stats;
pub mod subject;

pub use sink::{subscriber_fn, FnSubscriber, Forwarder, Printer, Recorder};
pub use stats::SubjectStats;
pub use subject::{NotifyError, Subject, SubjectConfig, Subscriber, SubscriberError};
