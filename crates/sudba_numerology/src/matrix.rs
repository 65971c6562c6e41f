//! Destiny matrix: the seven numbers derived from a birth date and their
//! 3x3 display grid.

use serde::Serialize;
use sudba_time::CalendarDate;

use crate::meaning::meaning_of;
use crate::reduce::reduce;

/// A reduced number with its table meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberReading {
    pub number: u32,
    pub meaning: &'static str,
}

impl NumberReading {
    /// Pair an already-reduced number with its meaning.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            meaning: meaning_of(number),
        }
    }
}

/// The four additional numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdditionalNumbers {
    /// reduce(day + month)
    pub first: NumberReading,
    /// reduce(day + year)
    pub second: NumberReading,
    /// reduce(month + year)
    pub third: NumberReading,
    /// reduce(first + second)
    pub fourth: NumberReading,
}

/// Full numerology reading for a birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumerologyResult {
    /// reduce(day + month + year)
    pub destiny: NumberReading,
    /// reduce(day)
    pub character: NumberReading,
    /// reduce(month)
    pub heart: NumberReading,
    pub additional: AdditionalNumbers,
}

/// Compute the destiny matrix for a birth date.
pub fn compute_matrix(date: &CalendarDate) -> NumerologyResult {
    let day = date.day();
    let month = date.month();
    // CalendarDate guarantees 1..=9999.
    let year = date.year().unsigned_abs();

    let first = reduce(day + month);
    let second = reduce(day + year);
    let third = reduce(month + year);
    let fourth = reduce(first + second);

    NumerologyResult {
        destiny: NumberReading::new(reduce(day + month + year)),
        character: NumberReading::new(reduce(day)),
        heart: NumberReading::new(reduce(month)),
        additional: AdditionalNumbers {
            first: NumberReading::new(first),
            second: NumberReading::new(second),
            third: NumberReading::new(third),
            fourth: NumberReading::new(fourth),
        },
    }
}

/// Number of cells in the matrix grid.
pub const GRID_CELLS: usize = 9;

/// 3x3 display grid, row-major.
///
/// ```text
/// character  destiny  heart
/// first      fourth   second
/// 0          third    0
/// ```
///
/// The two zero cells are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatrixGrid {
    pub cells: [u32; GRID_CELLS],
}

impl MatrixGrid {
    /// Cell at (row, col), both 0-based. `None` outside the 3x3 bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<u32> {
        if row < 3 && col < 3 {
            Some(self.cells[row * 3 + col])
        } else {
            None
        }
    }

    /// The three rows, top to bottom.
    pub fn rows(&self) -> [[u32; 3]; 3] {
        let c = &self.cells;
        [[c[0], c[1], c[2]], [c[3], c[4], c[5]], [c[6], c[7], c[8]]]
    }
}

/// Lay out a reading as the 3x3 grid. No new computation.
pub fn build_grid(result: &NumerologyResult) -> MatrixGrid {
    let add = &result.additional;
    MatrixGrid {
        cells: [
            result.character.number,
            result.destiny.number,
            result.heart.number,
            add.first.number,
            add.fourth.number,
            add.second.number,
            0,
            add.third.number,
            0,
        ],
    }
}
