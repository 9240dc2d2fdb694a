//! Error types for the seasonal-bootstrap library.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for bootstrap operations.
pub type Result<T> = std::result::Result<T, BootstrapError>;

/// Errors that can occur while building inputs or sampling.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BootstrapError {
    /// Historical date collection is empty.
    #[error("empty historical date set")]
    EmptyDates,

    /// Target window start is not strictly before its end.
    #[error("invalid target range: start {start} must be before end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Target window exceeds the maximum supported length.
    #[error("target window too long: {days} days (maximum {max})")]
    WindowTooLong { days: i64, max: i64 },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Historical coverage is too short for seasonal sampling.
    #[error("insufficient history: need a span of at least {needed} days, got {got}")]
    InsufficientHistory { needed: i64, got: i64 },

    /// The retry budget for drawing a valid block was exhausted.
    #[error(
        "sampling exhausted in simulation {simulation} at {target_date}: no valid block after {attempts} attempts"
    )]
    SamplingExhausted {
        simulation: usize,
        target_date: NaiveDate,
        attempts: usize,
    },
}
