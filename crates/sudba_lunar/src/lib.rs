//! Lunar clock: moon age, phase, illumination and daily guidance.
//!
//! This crate provides:
//! - Moon age from a fixed reference new moon and the mean synodic month
//! - A coarse five-bucket phase model with descriptions and forecasts
//! - Illumination percentage, shadow offset and lunar day number
//! - Favorable/unfavorable activity lists and multi-day outlooks
//!
//! All functions are pure; callers decide when to recompute.

pub mod age;
pub mod illumination;
pub mod phase;
pub mod recommendation;
pub mod report;
pub mod report_types;

pub use age::{
    REFERENCE_NEW_MOON_JD, REFERENCE_NEW_MOON_UNIX_MS, SYNODIC_MONTH_DAYS, cycle_fraction,
    moon_age, moon_age_jd,
};
pub use illumination::{MAX_LUNAR_DAY, illumination_percent, lunar_day, terminator_offset_percent};
pub use phase::{
    ALL_PHASES, GENERIC_FORECAST, MoonPhase, PHASE_BANDS, day_forecast, forecast_for_name,
    moon_phase,
};
pub use recommendation::{
    LUNAR_DAY_SPECIALS, Leaning, Recommendations, lunar_day_special, recommendations,
};
pub use report::{DEFAULT_OUTLOOK_DAYS, lunar_report, moon_sample, outlook};
pub use report_types::{DayOutlook, LunarReport, MoonSample};
