//! Puzzle text parsing.
//!
//! The source format is a free-form text blob: all whitespace is stripped,
//! the remaining character count must be `n⁴` for some integer `n` (the
//! block edge length), and every remaining character is read as a decimal
//! digit. Anything that is not a digit — `.`, `-`, letters — marks a blank
//! cell, which is what lets puzzle files use `-` for unknowns.

use crate::sudoku::error::SudokuError;
use crate::sudoku::grid::Grid;
use itertools::Itertools;
use std::fs;
use std::path::Path;

/// A 4×4 puzzle with a single blank, solvable in one deduction step.
pub const EXAMPLE_FOUR: &str = "
    12 34
    34 21

    21 -3
    43 12
";

/// A 4×4 puzzle with three diagonal givens and no naked or hidden single;
/// solving it requires the backtracking engine.
pub const EXAMPLE_FOUR_SPARSE: &str = "
    1- --
    -2 --

    -- 3-
    -- --
";

/// The classic 9×9 example puzzle; deduction alone does not finish it.
pub const EXAMPLE_NINE: &str = "
    53- -7- ---
    6-- 195 ---
    -98 --- -6-

    8-- -6- --3
    4-- 8-3 --1
    7-- -2- --6

    -6- --- 28-
    --- 419 --5
    --- -8- -79
";

/// Largest integer `n` with `n⁴ == len`, if any.
fn integer_fourth_root(len: usize) -> Option<usize> {
    let mut n = 0;
    while n * n * n * n < len {
        n += 1;
    }
    (n * n * n * n == len).then_some(n)
}

/// Parses a puzzle from a text blob.
///
/// # Errors
///
/// Returns [`SudokuError::InvalidLength`] if the stripped input length has
/// no integer fourth root, or any error from [`Grid::with_givens`].
pub fn parse_sudoku(input: &str) -> Result<Grid, SudokuError> {
    let cells = input.chars().filter(|c| !c.is_whitespace()).collect_vec();

    let size = integer_fourth_root(cells.len())
        .ok_or(SudokuError::InvalidLength { len: cells.len() })?;

    let values = cells
        .iter()
        .map(|c| c.to_digit(10).map_or(0, |d| d as usize))
        .collect_vec();

    Grid::with_givens(size, &values)
}

/// Reads and parses a puzzle file.
///
/// # Errors
///
/// Returns [`SudokuError::Io`] if the file cannot be read, plus everything
/// [`parse_sudoku`] can return. Whether an unreadable file is fatal is the
/// caller's policy (the CLI aborts).
pub fn parse_sudoku_file<P: AsRef<Path>>(path: P) -> Result<Grid, SudokuError> {
    let data = fs::read_to_string(path)?;
    parse_sudoku(&data)
}
