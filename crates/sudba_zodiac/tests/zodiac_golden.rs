//! Golden-value tests for sign ranges.

use sudba_time::CalendarDate;
use sudba_zodiac::{ALL_SIGNS, ZodiacSign, sign_for, sign_for_date};

#[test]
fn documented_boundaries() {
    assert_eq!(sign_for(21, 3), Some(ZodiacSign::Aries));
    assert_eq!(sign_for(19, 4), Some(ZodiacSign::Aries));
    assert_eq!(sign_for(20, 4), Some(ZodiacSign::Taurus));
    assert_eq!(sign_for(21, 12), Some(ZodiacSign::Capricorn));
    assert_eq!(sign_for(19, 1), Some(ZodiacSign::Capricorn));
}

#[test]
fn every_range_start_and_end() {
    for s in ALL_SIGNS {
        let r = s.range();
        assert_eq!(sign_for(r.start_day, r.start_month), Some(s), "{s} start");
        assert_eq!(sign_for(r.end_day, r.end_month), Some(s), "{s} end");
    }
}

/// Walk a leap year: exactly one sign matches each day, and each sign
/// owns a contiguous block of 29 to 32 days.
#[test]
fn leap_year_partition() {
    let mut d = CalendarDate::new(2024, 1, 1).unwrap().to_naive();
    let mut counts = [0u32; 12];
    for _ in 0..366 {
        let date = CalendarDate::try_from(d).unwrap();
        let matches = ALL_SIGNS
            .iter()
            .filter(|s| s.range().contains(date.day(), date.month()))
            .count();
        assert_eq!(matches, 1, "{date}");
        counts[sign_for_date(&date).index() as usize] += 1;
        d = d.succ_opt().unwrap();
    }
    assert_eq!(counts.iter().sum::<u32>(), 366);
    for (i, c) in counts.iter().enumerate() {
        assert!((29..=32).contains(c), "{}: {c} days", ALL_SIGNS[i]);
    }
}

#[test]
fn birthdays() {
    let cases = [
        ((1990, 6, 15), ZodiacSign::Gemini),
        ((1987, 11, 29), ZodiacSign::Sagittarius),
        ((2000, 1, 1), ZodiacSign::Capricorn),
        ((1975, 8, 23), ZodiacSign::Virgo),
        ((1969, 7, 20), ZodiacSign::Cancer),
    ];
    for ((y, m, d), sign) in cases {
        let date = CalendarDate::new(y, m, d).unwrap();
        assert_eq!(sign_for_date(&date), sign, "{date}");
    }
}
