//! Line-oriented printing subscriber

use std::cell::RefCell;
use std::io::{self, Write};

use crate::subject::{Subscriber, SubscriberError};

/// Subscriber that writes `"<label>: <value>"` lines to a writer
pub struct Printer<W: Write> {
    label: String,
    out: RefCell<W>,
}

impl Printer<io::Stdout> {
    /// Print to standard output
    pub fn stdout(label: impl Into<String>) -> Self {
        Self::new(label, io::stdout())
    }
}

impl<W: Write> Printer<W> {
    pub fn new(label: impl Into<String>, out: W) -> Self {
        Self {
            label: label.into(),
            out: RefCell::new(out),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Take back the writer
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> Subscriber for Printer<W> {
    fn receive(&self, value: &str) -> Result<(), SubscriberError> {
        let mut out = self.out.borrow_mut();
        writeln!(out, "{}: {}", self.label, value)?;
        out.flush()?;
        Ok(())
    }
}

impl<W: Write> std::fmt::Debug for Printer<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Printer")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
