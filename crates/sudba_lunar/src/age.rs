//! Moon age: days elapsed since the most recent mean new moon.
//!
//! Uses a single reference new moon and the mean synodic month. This is a
//! mean-motion approximation; real new moons drift from it by up to about
//! half a day.

use sudba_time::{MILLIS_PER_DAY, Timestamp, UNIX_EPOCH_JD};

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530588853;

/// Reference new moon, 2000-01-06T18:14:00Z, in Unix milliseconds.
pub const REFERENCE_NEW_MOON_UNIX_MS: f64 = 947_182_440_000.0;

/// Reference new moon as a Julian Date.
pub const REFERENCE_NEW_MOON_JD: f64 = REFERENCE_NEW_MOON_UNIX_MS / MILLIS_PER_DAY + UNIX_EPOCH_JD;

/// Moon age in days for a Julian Date, in [0, SYNODIC_MONTH_DAYS).
pub fn moon_age_jd(jd: f64) -> f64 {
    let r = (jd - REFERENCE_NEW_MOON_JD) % SYNODIC_MONTH_DAYS;
    // `%` keeps the sign of the dividend: dates before the reference give r < 0.
    let age = if r < 0.0 { r + SYNODIC_MONTH_DAYS } else { r };
    // A tiny negative r can round up to exactly one month.
    if age >= SYNODIC_MONTH_DAYS { 0.0 } else { age }
}

/// Moon age in days at `ts`, in [0, SYNODIC_MONTH_DAYS).
pub fn moon_age(ts: Timestamp) -> f64 {
    moon_age_jd(ts.as_jd())
}

/// Fraction of the synodic cycle elapsed, in [0, 1).
pub fn cycle_fraction(age_days: f64) -> f64 {
    age_days / SYNODIC_MONTH_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_jd() {
        assert!((REFERENCE_NEW_MOON_JD - 2_451_550.259_722_2).abs() < 1e-6);
    }

    #[test]
    fn age_zero_at_reference() {
        let ts = Timestamp::from_unix_millis(REFERENCE_NEW_MOON_UNIX_MS);
        assert!(moon_age(ts).abs() < 1e-9);
    }

    #[test]
    fn age_after_reference() {
        let age = moon_age_jd(REFERENCE_NEW_MOON_JD + 10.25);
        assert!((age - 10.25).abs() < 1e-9);
    }

    #[test]
    fn age_before_reference_is_normalized() {
        let age = moon_age_jd(REFERENCE_NEW_MOON_JD - 1.0);
        assert!((age - (SYNODIC_MONTH_DAYS - 1.0)).abs() < 1e-9, "got {age}");
    }

    #[test]
    fn far_past_in_range() {
        let age = moon_age_jd(REFERENCE_NEW_MOON_JD - 100_000.3);
        assert!((0.0..SYNODIC_MONTH_DAYS).contains(&age));
    }

    #[test]
    fn exact_multiple_wraps_to_zero() {
        let age = moon_age_jd(REFERENCE_NEW_MOON_JD - 3.0 * SYNODIC_MONTH_DAYS);
        assert!(age < 1e-6 || SYNODIC_MONTH_DAYS - age < 1e-6, "got {age}");
        assert!(age < SYNODIC_MONTH_DAYS);
    }

    #[test]
    fn periodic_over_one_month() {
        let ts = Timestamp::from_unix_millis(1_700_000_000_000.0);
        let a = moon_age(ts);
        let b = moon_age(ts.add_days(SYNODIC_MONTH_DAYS));
        assert!((a - b).abs() < 1e-6, "{a} vs {b}");
    }

    #[test]
    fn cycle_fraction_half() {
        assert!((cycle_fraction(SYNODIC_MONTH_DAYS / 2.0) - 0.5).abs() < 1e-12);
    }
}
