//! Error types for cohort construction.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for cohort operations.
pub type Result<T> = std::result::Result<T, CohortError>;

/// Errors that can occur while building cut-off schedules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CohortError {
    /// Malformed date bounds
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// Start bound of the range
        start: NaiveDate,
        /// End bound of the range
        end: NaiveDate,
    },

    /// A test window was requested from an empty training schedule
    #[error("cannot derive a test window from an empty training set")]
    EmptyTrainingSet,
}
