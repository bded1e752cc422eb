//! Delivery statistics for a subject

/// Point-in-time snapshot of a subject's activity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectStats {
    /// Registered subscribers, duplicates included
    pub subscriber_count: usize,
    /// Number of `set_state` calls so far
    pub updates: u64,
    /// Notification rounds started, via `set_state` or `notify`
    pub rounds: u64,
    /// Successful `receive` calls across all rounds
    pub deliveries: u64,
    /// Rounds cut short by a failing subscriber
    pub failed_rounds: u64,
}

impl SubjectStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Average successful deliveries per notification round
    pub fn fan_out(&self) -> f64 {
        if self.rounds > 0 {
            self.deliveries as f64 / self.rounds as f64
        } else {
            0.0
        }
    }
}
