//! Lunar clock entry points with tracing.

use sudba_lunar::{DayOutlook, LunarReport};
use sudba_time::Timestamp;
use tracing::{debug, trace};

/// Lunar report for an instant.
pub fn lunar_report(at: Timestamp) -> LunarReport {
    let report = sudba_lunar::lunar_report(at);
    debug!(
        age_days = report.sample.age_days,
        phase = %report.sample.phase,
        lunar_day = report.sample.lunar_day,
        illumination = report.sample.illumination_percent,
        "lunar report"
    );
    report
}

/// Lunar report for the current wall-clock instant.
pub fn lunar_report_now() -> LunarReport {
    lunar_report(Timestamp::now())
}

/// Forecast strip of `days` entries from `start`.
pub fn outlook(start: Timestamp, days: u32) -> Vec<DayOutlook> {
    let strip = sudba_lunar::outlook(start, days);
    for day in &strip {
        trace!(
            offset = day.day_offset,
            phase = %day.sample.phase,
            lunar_day = day.sample.lunar_day,
            "outlook day"
        );
    }
    strip
}
