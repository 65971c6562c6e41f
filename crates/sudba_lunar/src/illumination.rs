//! Illuminated fraction, shadow offset and lunar day from the moon age.

use std::f64::consts::TAU;

use crate::age::cycle_fraction;

/// Highest lunar day number.
pub const MAX_LUNAR_DAY: u8 = 30;

/// Percentage of the disc that is lit, rounded to the nearest integer.
///
/// Four sinusoidal quarter ramps over the cycle fraction `p`:
/// 0 -> 50 -> 100 -> 50 -> 0.
pub fn illumination_percent(age_days: f64) -> u8 {
    let p = cycle_fraction(age_days);
    let lit = if p < 0.25 {
        (p * TAU).sin() * 50.0
    } else if p < 0.5 {
        50.0 + ((p - 0.25) * TAU).sin() * 50.0
    } else if p < 0.75 {
        100.0 - ((p - 0.5) * TAU).sin() * 50.0
    } else {
        50.0 - ((p - 0.75) * TAU).sin() * 50.0
    };
    lit.round().clamp(0.0, 100.0) as u8
}

/// Horizontal position (percent of the disc width) of the shadow circle
/// used to draw the moon.
///
/// Slides 50 -> 0 over the waxing half and 50 -> 100 over the waning half.
pub fn terminator_offset_percent(age_days: f64) -> f64 {
    let p = cycle_fraction(age_days);
    if p < 0.5 {
        50.0 - (p * TAU).sin() * 50.0
    } else {
        50.0 + ((p - 0.5) * TAU).sin() * 50.0
    }
}

/// 1-based day within the lunar cycle.
pub fn lunar_day(age_days: f64) -> u8 {
    (age_days.floor() as i64 + 1).clamp(1, MAX_LUNAR_DAY as i64) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::age::SYNODIC_MONTH_DAYS;

    #[test]
    fn dark_at_new_moon() {
        assert_eq!(illumination_percent(0.0), 0);
    }

    #[test]
    fn full_at_half_cycle() {
        assert_eq!(illumination_percent(SYNODIC_MONTH_DAYS / 2.0), 100);
        assert!(illumination_percent(SYNODIC_MONTH_DAYS / 2.0 - 0.5) >= 99);
    }

    #[test]
    fn half_at_quarters() {
        assert_eq!(illumination_percent(SYNODIC_MONTH_DAYS * 0.25), 50);
        assert_eq!(illumination_percent(SYNODIC_MONTH_DAYS * 0.75), 50);
    }

    #[test]
    fn dark_again_at_end_of_cycle() {
        assert!(illumination_percent(SYNODIC_MONTH_DAYS - 1e-6) <= 1);
    }

    #[test]
    fn always_in_range() {
        let mut age = 0.0;
        while age < SYNODIC_MONTH_DAYS {
            assert!(illumination_percent(age) <= 100);
            age += 0.05;
        }
    }

    #[test]
    fn waxing_half_is_monotone() {
        let mut prev = 0;
        let mut age = 0.0;
        while age < SYNODIC_MONTH_DAYS / 2.0 {
            let v = illumination_percent(age);
            assert!(v >= prev, "dropped at {age}");
            prev = v;
            age += 0.1;
        }
    }

    #[test]
    fn terminator_path() {
        assert!((terminator_offset_percent(0.0) - 50.0).abs() < 1e-9);
        assert!(terminator_offset_percent(SYNODIC_MONTH_DAYS * 0.25).abs() < 1e-9);
        assert!((terminator_offset_percent(SYNODIC_MONTH_DAYS * 0.75) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn lunar_day_numbering() {
        assert_eq!(lunar_day(0.0), 1);
        assert_eq!(lunar_day(0.99), 1);
        assert_eq!(lunar_day(1.0), 2);
        assert_eq!(lunar_day(14.5), 15);
        assert_eq!(lunar_day(SYNODIC_MONTH_DAYS - 1e-9), 30);
    }
}
