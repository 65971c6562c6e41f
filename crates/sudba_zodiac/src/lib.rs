//! Tropical zodiac by calendar day, plus the daily horoscope table.
//!
//! Signs are resolved from fixed (month, day) ranges, not from the Sun's
//! longitude. Out-of-calendar input yields `None`.

pub mod horoscope;
pub mod sign;

pub use horoscope::{HOROSCOPE_UNAVAILABLE, horoscope, horoscope_for_name};
pub use sign::{ALL_SIGNS, SignRange, ZodiacSign, is_valid_day_month, sign_for, sign_for_date};
