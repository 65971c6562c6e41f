//! Birth chart: numerology matrix plus zodiac sign for one birth date.

use serde::Serialize;
use sudba_numerology::{MatrixGrid, NumerologyResult, build_grid, compute_matrix};
use sudba_time::CalendarDate;
use sudba_zodiac::{ZodiacSign, horoscope, sign_for_date};
use tracing::debug;

/// Everything derived from a birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthChart {
    pub date: CalendarDate,
    pub sign: ZodiacSign,
    /// Daily horoscope sentence for `sign`.
    pub horoscope: &'static str,
    pub matrix: NumerologyResult,
    pub grid: MatrixGrid,
}

/// Build the chart for a birth date.
pub fn birth_chart(date: &CalendarDate) -> BirthChart {
    let matrix = compute_matrix(date);
    let sign = sign_for_date(date);
    debug!(%date, %sign, destiny = matrix.destiny.number, "birth chart");
    BirthChart {
        date: *date,
        sign,
        horoscope: horoscope(sign),
        matrix,
        grid: build_grid(&matrix),
    }
}
