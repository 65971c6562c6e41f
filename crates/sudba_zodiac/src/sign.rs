//! Zodiac sign from day and month.
//!
//! Twelve fixed calendar ranges, each straddling a month boundary. Every
//! valid (day, month) pair falls in exactly one range.

use serde::Serialize;
use sudba_time::CalendarDate;

/// The 12 signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

/// Inclusive calendar range of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignRange {
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
}

impl SignRange {
    const fn new(start_month: u32, start_day: u32, end_month: u32, end_day: u32) -> Self {
        Self {
            start_month,
            start_day,
            end_month,
            end_day,
        }
    }

    /// Whether (day, month) lies in this range.
    pub const fn contains(&self, day: u32, month: u32) -> bool {
        (month == self.start_month && day >= self.start_day)
            || (month == self.end_month && day <= self.end_day)
    }
}

/// Longest month length for each month, February counted with its leap day.
const MAX_DAYS_IN_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

impl ZodiacSign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }

    /// Calendar range of the sign.
    pub const fn range(self) -> SignRange {
        match self {
            Self::Aries => SignRange::new(3, 21, 4, 19),
            Self::Taurus => SignRange::new(4, 20, 5, 20),
            Self::Gemini => SignRange::new(5, 21, 6, 20),
            Self::Cancer => SignRange::new(6, 21, 7, 22),
            Self::Leo => SignRange::new(7, 23, 8, 22),
            Self::Virgo => SignRange::new(8, 23, 9, 22),
            Self::Libra => SignRange::new(9, 23, 10, 22),
            Self::Scorpio => SignRange::new(10, 23, 11, 21),
            Self::Sagittarius => SignRange::new(11, 22, 12, 20),
            Self::Capricorn => SignRange::new(12, 21, 1, 19),
            Self::Aquarius => SignRange::new(1, 20, 2, 18),
            Self::Pisces => SignRange::new(2, 19, 3, 20),
        }
    }

    /// Parse an English sign name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_SIGNS
            .iter()
            .copied()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether (day, month) is a real calendar day in some year.
pub fn is_valid_day_month(day: u32, month: u32) -> bool {
    (1..=12).contains(&month) && day >= 1 && day <= MAX_DAYS_IN_MONTH[(month - 1) as usize]
}

/// Sign for a day and month.
///
/// Returns `None` when the pair is outside calendar bounds; callers must
/// treat that as an unknown sign.
pub fn sign_for(day: u32, month: u32) -> Option<ZodiacSign> {
    if !is_valid_day_month(day, month) {
        return None;
    }
    ALL_SIGNS
        .iter()
        .copied()
        .find(|s| s.range().contains(day, month))
}

/// Sign for a validated date.
pub fn sign_for_date(date: &CalendarDate) -> ZodiacSign {
    // A validated date always has a sign; Capricorn holds the year-end wrap.
    sign_for(date.day(), date.month()).unwrap_or(ZodiacSign::Capricorn)
}
