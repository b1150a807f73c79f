//! Errors for puzzle construction and parsing.
//!
//! Only the input boundary produces errors. An unsolvable puzzle is not an
//! error: `Grid::solve` always returns and callers check `Grid::is_solved`.

use thiserror::Error;

/// Errors raised while building a grid from external input.
#[derive(Debug, Error)]
pub enum SudokuError {
    /// The stripped puzzle text has a length with no integer fourth root, so
    /// no grid size fits it.
    #[error("puzzle has {len} cells, which is not a fourth power of any grid size")]
    InvalidLength {
        /// Number of non-whitespace characters in the input.
        len: usize,
    },

    /// The seed value slice does not match the requested grid size.
    #[error("grid of size {size} needs {expected} initial values, got {actual}")]
    InvalidInput {
        /// Block edge length of the grid being built.
        size: usize,
        /// Required number of values (`size⁴`).
        expected: usize,
        /// Number of values actually supplied.
        actual: usize,
    },

    /// A seed value is too large for the grid it is meant for.
    #[error("value {value} at cell {index} exceeds the grid maximum {max_value}")]
    InvalidValue {
        /// Arena index of the offending cell.
        index: usize,
        /// The out-of-range value.
        value: usize,
        /// Largest legal value for the grid (`size²`).
        max_value: usize,
    },

    /// The puzzle source could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
