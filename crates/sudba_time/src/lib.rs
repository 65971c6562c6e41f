//! Calendar dates and instants for the sudba calculators.
//!
//! This crate provides:
//! - `CalendarDate`, a validated Gregorian date used as birth-date input
//! - `Timestamp`, a millisecond instant used as lunar-clock input
//! - Julian Date conversions on Unix milliseconds

pub mod calendar_date;
pub mod error;
pub mod julian;

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use calendar_date::{CalendarDate, MAX_YEAR, MIN_YEAR};
pub use error::TimeError;
pub use julian::{MILLIS_PER_DAY, UNIX_EPOCH_JD, jd_to_unix_millis, unix_millis_to_jd};

/// An instant as milliseconds since 1970-01-01T00:00:00Z.
///
/// Fractional milliseconds are kept so that day offsets such as one
/// synodic month can be added without rounding.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Timestamp {
    unix_ms: f64,
}

impl Timestamp {
    /// Create a timestamp from Unix milliseconds.
    pub fn from_unix_millis(ms: f64) -> Self {
        Self { unix_ms: ms }
    }

    /// Create a timestamp from a Julian Date.
    pub fn from_jd(jd: f64) -> Self {
        Self {
            unix_ms: jd_to_unix_millis(jd),
        }
    }

    /// Create a timestamp from a UTC `DateTime`.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self {
            unix_ms: dt.timestamp_millis() as f64,
        }
    }

    /// The current wall-clock instant.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Milliseconds since the Unix epoch.
    pub fn as_unix_millis(self) -> f64 {
        self.unix_ms
    }

    /// Fractional Julian Date.
    pub fn as_jd(self) -> f64 {
        unix_millis_to_jd(self.unix_ms)
    }

    /// Shift by a (possibly fractional, possibly negative) number of days.
    pub fn add_days(self, days: f64) -> Self {
        Self {
            unix_ms: self.unix_ms + days * MILLIS_PER_DAY,
        }
    }

    /// Convert back to a UTC `DateTime`, truncating sub-millisecond parts.
    ///
    /// Returns `None` outside chrono's representable range.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.unix_ms.floor() as i64)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

impl FromStr for Timestamp {
    type Err = TimeError;

    /// Parse an RFC 3339 instant such as `2024-01-11T11:57:00Z`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dt = DateTime::parse_from_rfc3339(s.trim())?;
        Ok(Self::from_datetime(dt.with_timezone(&Utc)))
    }
}
