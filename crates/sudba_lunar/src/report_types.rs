//! Types for lunar clock results.

use serde::Serialize;
use sudba_time::Timestamp;

use crate::phase::MoonPhase;
use crate::recommendation::Recommendations;

/// Moon state at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonSample {
    /// Days since the last mean new moon, [0, synodic month).
    pub age_days: f64,
    /// Coarse phase label.
    pub phase: MoonPhase,
    /// Lit percentage of the disc (0-100).
    pub illumination_percent: u8,
    /// 1-based lunar day (1-30).
    pub lunar_day: u8,
}

/// Everything shown for the current moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LunarReport {
    /// Instant the report was computed for.
    pub at: Timestamp,
    pub sample: MoonSample,
    /// Shadow-disc position for drawing the moon (0-100).
    pub terminator_offset_percent: f64,
    pub description: &'static str,
    pub forecast: &'static str,
    pub recommendations: Recommendations,
}

/// One entry of a multi-day forecast strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayOutlook {
    /// Days after the start instant (0 = today).
    pub day_offset: u32,
    pub at: Timestamp,
    pub sample: MoonSample,
    pub terminator_offset_percent: f64,
    pub forecast: &'static str,
}
