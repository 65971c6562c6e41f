//! Favorable and unfavorable activities by phase and lunar day.

use serde::Serialize;

use crate::phase::MoonPhase;

/// Which list a lunar-day entry is added to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Leaning {
    Favorable,
    Unfavorable,
}

/// One extra entry for specific lunar days, added after the phase list.
pub const LUNAR_DAY_SPECIALS: [(u8, Leaning, &str); 5] = [
    (1, Leaning::Favorable, "Draw up plans for the month"),
    (9, Leaning::Unfavorable, "Set out on journeys"),
    (15, Leaning::Favorable, "Creative realization"),
    (23, Leaning::Unfavorable, "Get married"),
    (29, Leaning::Favorable, "Rest and meditation"),
];

/// Activity lists for one day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Recommendations {
    pub favorable: Vec<&'static str>,
    pub unfavorable: Vec<&'static str>,
}

fn phase_favorable(phase: MoonPhase) -> [&'static str; 3] {
    match phase {
        MoonPhase::NewMoon => ["Start new projects", "Plan for the future", "Meditate"],
        MoonPhase::WaxingCrescent => ["Begin studies", "Exercise", "Make investments"],
        MoonPhase::FirstQuarter => ["Take the initiative", "Resolve conflicts", "Close deals"],
        MoonPhase::FullMoon => ["Creative work", "Time with friends", "Romantic meetings"],
        MoonPhase::WaningCrescent => ["Finish projects", "Clear out the old", "Clean up"],
    }
}

fn phase_unfavorable(phase: MoonPhase) -> [&'static str; 3] {
    match phase {
        MoonPhase::NewMoon => [
            "Make important decisions",
            "Sign contracts",
            "Set out on journeys",
        ],
        MoonPhase::WaxingCrescent => ["Undergo surgery", "Wrap up affairs", "Quit a job"],
        MoonPhase::FirstQuarter => [
            "Postpone tasks",
            "Start renovations",
            "Change your image",
        ],
        MoonPhase::FullMoon => [
            "Make serious decisions",
            "Get into conflicts",
            "Drive vehicles",
        ],
        MoonPhase::WaningCrescent => ["Start anything new", "Go shopping", "Meet new people"],
    }
}

/// The extra entry for `lunar_day`, if that day has one.
pub fn lunar_day_special(lunar_day: u8) -> Option<(Leaning, &'static str)> {
    LUNAR_DAY_SPECIALS
        .iter()
        .find(|(day, _, _)| *day == lunar_day)
        .map(|(_, leaning, text)| (*leaning, *text))
}

/// Activity lists for a phase and lunar day.
pub fn recommendations(phase: MoonPhase, lunar_day: u8) -> Recommendations {
    let mut recs = Recommendations {
        favorable: phase_favorable(phase).to_vec(),
        unfavorable: phase_unfavorable(phase).to_vec(),
    };
    match lunar_day_special(lunar_day) {
        Some((Leaning::Favorable, text)) => recs.favorable.push(text),
        Some((Leaning::Unfavorable, text)) => recs.unfavorable.push(text),
        None => {}
    }
    recs
}
