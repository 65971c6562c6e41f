//! Julian Date arithmetic on millisecond timestamps.
//!
//! Timestamps follow the browser `Date` convention: milliseconds since
//! 1970-01-01T00:00:00Z, no leap seconds.

/// Milliseconds in one civil day.
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Date of the Unix epoch (1970-01-01T00:00:00Z).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Convert Unix milliseconds to a fractional Julian Date.
pub fn unix_millis_to_jd(ms: f64) -> f64 {
    ms / MILLIS_PER_DAY + UNIX_EPOCH_JD
}

/// Convert a fractional Julian Date back to Unix milliseconds.
pub fn jd_to_unix_millis(jd: f64) -> f64 {
    (jd - UNIX_EPOCH_JD) * MILLIS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch_is_jd_2440587_5() {
        assert_eq!(unix_millis_to_jd(0.0), UNIX_EPOCH_JD);
    }

    #[test]
    fn j2000_noon() {
        // 2000-01-01T12:00:00Z = JD 2451545.0
        let ms = 946_728_000_000.0;
        assert!((unix_millis_to_jd(ms) - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn jd_roundtrip() {
        let ms = 1_700_000_000_123.0;
        assert!((jd_to_unix_millis(unix_millis_to_jd(ms)) - ms).abs() < 0.1);
    }

    #[test]
    fn before_unix_epoch_is_negative() {
        assert!(jd_to_unix_millis(2_440_000.0) < 0.0);
    }
}
