//! Convenience facade for the sudba calculators.
//!
//! Re-exports the numerology, lunar and zodiac crates and adds:
//! - `BirthChart`, the matrix plus sign and horoscope for a birth date
//! - traced lunar report and outlook entry points
//! - the `UserProfile` record with sign auto-detection and a display view
//!
//! # Quick start
//!
//! ```rust
//! use sudba_rs::*;
//!
//! let date: CalendarDate = "1990-06-15".parse().unwrap();
//! let chart = birth_chart(&date);
//! assert_eq!(chart.matrix.destiny.number, 4);
//! assert_eq!(chart.sign, ZodiacSign::Gemini);
//!
//! let report = lunar_report("2024-01-11T11:57:00Z".parse().unwrap());
//! assert_eq!(report.sample.phase, MoonPhase::NewMoon);
//! ```

pub mod chart;
pub mod error;
pub mod lunar;
pub mod profile;

// Primary re-exports: callers only need `use sudba_rs::*`
pub use chart::{BirthChart, birth_chart};
pub use error::SudbaError;
pub use lunar::{lunar_report, lunar_report_now, outlook};
pub use profile::{NOT_SPECIFIED, ProfileView, UserProfile};

pub use sudba_config::{ConfigError, SudbaConfig};
pub use sudba_lunar::{
    DEFAULT_OUTLOOK_DAYS, DayOutlook, GENERIC_FORECAST, Leaning, LunarReport, MoonPhase,
    MoonSample, Recommendations, SYNODIC_MONTH_DAYS, day_forecast, forecast_for_name,
    illumination_percent, lunar_day, moon_age, moon_phase, moon_sample, recommendations,
    terminator_offset_percent,
};
pub use sudba_numerology::{
    AdditionalNumbers, FALLBACK_MEANING, MatrixGrid, NumberReading, NumerologyResult, build_grid,
    compute_matrix, meaning_of, reduce,
};
pub use sudba_time::{CalendarDate, TimeError, Timestamp};
pub use sudba_zodiac::{
    HOROSCOPE_UNAVAILABLE, SignRange, ZodiacSign, horoscope, horoscope_for_name, sign_for,
    sign_for_date,
};
