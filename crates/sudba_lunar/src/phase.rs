//! Coarse five-bucket moon phase.
//!
//! The bands do not separate gibbous from quarter phases; the
//! recommendation tables are keyed to exactly these five labels.

use serde::Serialize;

/// Upper age bound (days, exclusive) of each band, in cycle order.
pub const PHASE_BANDS: [(f64, MoonPhase); 5] = [
    (1.0, MoonPhase::NewMoon),
    (7.4, MoonPhase::WaxingCrescent),
    (14.8, MoonPhase::FirstQuarter),
    (22.1, MoonPhase::FullMoon),
    (29.5, MoonPhase::WaningCrescent),
];

/// Forecast used when a phase label is not recognised.
pub const GENERIC_FORECAST: &str = "A neutral day. Act as circumstances require.";

/// The five phase labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    FullMoon,
    WaningCrescent,
}

/// All phases in cycle order.
pub const ALL_PHASES: [MoonPhase; 5] = [
    MoonPhase::NewMoon,
    MoonPhase::WaxingCrescent,
    MoonPhase::FirstQuarter,
    MoonPhase::FullMoon,
    MoonPhase::WaningCrescent,
];

impl MoonPhase {
    /// Classify a moon age in days.
    ///
    /// Ages at or past 29.5 fold back to `NewMoon`, which also covers a
    /// floating-point age that reaches the synodic length.
    pub fn from_age(age_days: f64) -> Self {
        PHASE_BANDS
            .iter()
            .find(|(upper, _)| age_days < *upper)
            .map(|(_, phase)| *phase)
            .unwrap_or(Self::NewMoon)
    }

    /// Display label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Moon",
            Self::FirstQuarter => "First Quarter",
            Self::FullMoon => "Full Moon",
            Self::WaningCrescent => "Waning Moon",
        }
    }

    /// Parse a display label (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_PHASES
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// What the sky looks like in this phase.
    pub const fn description(self) -> &'static str {
        match self {
            Self::NewMoon => {
                "The Moon is not visible in the sky. A time for new beginnings and planning."
            }
            Self::WaxingCrescent => {
                "The Moon is growing. A favorable time to launch projects and grow."
            }
            Self::FirstQuarter => "Half of the Moon is lit. A time for action and decisions.",
            Self::FullMoon => "The Moon is fully lit. Peak energy and emotionality.",
            Self::WaningCrescent => "The Moon is waning. A time to finish things and take stock.",
        }
    }

    /// One-line forecast for a day in this phase.
    pub const fn forecast(self) -> &'static str {
        match self {
            Self::NewMoon => {
                "A day of new beginnings. Energy is only accumulating, so focus on planning."
            }
            Self::WaxingCrescent => {
                "A period of growth. A great time to start projects and gain new knowledge."
            }
            Self::FirstQuarter => {
                "A time for active steps. Overcome obstacles and move toward your goals."
            }
            Self::FullMoon => "Peak energy. Emotions may run high, so be careful in conversation.",
            Self::WaningCrescent => {
                "A time of completion. Let go of what you no longer need and sum things up."
            }
        }
    }
}

impl std::fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a moon age in days. Same as [`MoonPhase::from_age`].
pub fn moon_phase(age_days: f64) -> MoonPhase {
    MoonPhase::from_age(age_days)
}

/// Forecast for a phase.
pub fn day_forecast(phase: MoonPhase) -> &'static str {
    phase.forecast()
}

/// Forecast for a phase label, or [`GENERIC_FORECAST`] if the label is unknown.
pub fn forecast_for_name(name: &str) -> &'static str {
    MoonPhase::from_name(name).map_or(GENERIC_FORECAST, MoonPhase::forecast)
}
