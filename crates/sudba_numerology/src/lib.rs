//! Destiny-matrix numerology.
//!
//! This crate provides:
//! - Digit reduction to a single digit or master number (11, 22, 33)
//! - The static number-meaning table
//! - The seven-number matrix for a birth date and its 3x3 grid
//!
//! Everything here is a pure function of its input.

pub mod matrix;
pub mod meaning;
pub mod reduce;

pub use matrix::{
    AdditionalNumbers, GRID_CELLS, MatrixGrid, NumberReading, NumerologyResult, build_grid,
    compute_matrix,
};
pub use meaning::{FALLBACK_MEANING, NUMBER_MEANINGS, lookup_meaning, meaning_of};
pub use reduce::{MASTER_NUMBERS, is_master, reduce, sum_digits};
