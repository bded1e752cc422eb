//! Subject statistics

pub mod metrics;

pub use metrics::SubjectStats;
