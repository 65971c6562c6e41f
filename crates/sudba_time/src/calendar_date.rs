//! Validated Gregorian calendar date.
//!
//! `CalendarDate` is the input to every birth-date calculation. Construction
//! is the only place a date is checked; calculators downstream assume a
//! well-formed value.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::TimeError;

/// Earliest supported year.
pub const MIN_YEAR: i32 = 1;
/// Latest supported year.
pub const MAX_YEAR: i32 = 9999;

/// A calendar date (proleptic Gregorian), years 1..=9999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Build a date, rejecting triples that do not exist on the calendar.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(TimeError::OutOfRange(year));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TimeError::InvalidDate { year, month, day })?;
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1-based.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of month, 1-based.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Convert to a `chrono::NaiveDate`.
    pub fn to_naive(&self) -> NaiveDate {
        // Validated in `new`, so the fallback is never taken.
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).unwrap_or_default()
    }

    /// Format as `DD.MM.YYYY`.
    pub fn to_dotted(&self) -> String {
        format!("{:02}.{:02}.{:04}", self.day, self.month, self.year)
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = TimeError;

    fn try_from(d: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(d.year(), d.month(), d.day())
    }
}

impl FromStr for CalendarDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?;
        Self::try_from(d)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
