//! Error types for date and timestamp construction.

use thiserror::Error;

/// Errors from building or parsing calendar dates and timestamps.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The (year, month, day) triple does not name a real Gregorian date.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Year outside the supported 1..=9999 window.
    #[error("year {0} outside supported range 1..=9999")]
    OutOfRange(i32),
    /// Text could not be parsed as a date or timestamp.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<chrono::ParseError> for TimeError {
    fn from(e: chrono::ParseError) -> Self {
        Self::Parse(e.to_string())
    }
}
