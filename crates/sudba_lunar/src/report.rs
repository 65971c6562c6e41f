//! Assembling samples, reports and outlooks from an instant.

use sudba_time::Timestamp;

use crate::age::moon_age;
use crate::illumination::{illumination_percent, lunar_day, terminator_offset_percent};
use crate::phase::MoonPhase;
use crate::recommendation::recommendations;
use crate::report_types::{DayOutlook, LunarReport, MoonSample};

/// Days in the default forecast strip (today, tomorrow, the day after).
pub const DEFAULT_OUTLOOK_DAYS: u32 = 3;

impl MoonSample {
    /// Derive every field from a moon age in days.
    pub fn from_age(age_days: f64) -> Self {
        Self {
            age_days,
            phase: MoonPhase::from_age(age_days),
            illumination_percent: illumination_percent(age_days),
            lunar_day: lunar_day(age_days),
        }
    }
}

/// Moon state at `ts`.
pub fn moon_sample(ts: Timestamp) -> MoonSample {
    MoonSample::from_age(moon_age(ts))
}

/// Full report for `ts`.
pub fn lunar_report(ts: Timestamp) -> LunarReport {
    let sample = moon_sample(ts);
    LunarReport {
        at: ts,
        sample,
        terminator_offset_percent: terminator_offset_percent(sample.age_days),
        description: sample.phase.description(),
        forecast: sample.phase.forecast(),
        recommendations: recommendations(sample.phase, sample.lunar_day),
    }
}

/// Forecast strip of `days` entries starting at `start`, one civil day apart.
pub fn outlook(start: Timestamp, days: u32) -> Vec<DayOutlook> {
    (0..days)
        .map(|i| {
            let at = start.add_days(f64::from(i));
            let sample = moon_sample(at);
            DayOutlook {
                day_offset: i,
                at,
                sample,
                terminator_offset_percent: terminator_offset_percent(sample.age_days),
                forecast: sample.phase.forecast(),
            }
        })
        .collect()
}
