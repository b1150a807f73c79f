#![deny(missing_docs)]
//! This crate provides a Sudoku solving engine for square grids of arbitrary
//! block size N (grid side N², N⁴ cells in total).
//!
//! Solving combines two phases: constraint propagation (naked singles and
//! hidden singles) applied until a fixed point is reached, followed by
//! exhaustive depth-first backtracking over whatever cells deduction could
//! not settle. `Grid::solve` always terminates; callers inspect
//! `Grid::is_solved` afterwards, since an unsolvable puzzle is ordinary
//! control flow rather than an error.

/// The `sudoku` module contains the grid data model, the deduction engine and
/// the backtracking search.
pub mod sudoku;
