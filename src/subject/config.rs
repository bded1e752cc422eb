//! Subject configuration

/// Default label attached to log events
pub const DEFAULT_SUBJECT_NAME: &str = "subject";

/// Subject configuration options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectConfig {
    /// Label used in log events
    pub name: String,

    /// Initial capacity of the subscriber list
    pub subscriber_capacity: usize,
}

impl Default for SubjectConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SUBJECT_NAME.to_string(),
            subscriber_capacity: 4,
        }
    }
}

impl SubjectConfig {
    /// Create a config with a custom label
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the label
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the initial subscriber list capacity
    pub fn subscriber_capacity(mut self, capacity: usize) -> Self {
        self.subscriber_capacity = capacity;
        self
    }
}
