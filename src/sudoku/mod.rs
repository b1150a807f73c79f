#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Core Sudoku solving logic.
//!
//! The grid owns a single contiguous arena of cells; rows, columns and
//! blocks are index-based views over that arena, so an assignment made
//! through the grid is immediately visible through all three partitions.

/// Per-cell sets of excluded candidate values.
pub mod candidates;

/// A single grid position: assigned value plus its exclusion set.
pub mod cell;

/// Error taxonomy for puzzle construction and parsing.
pub mod error;

/// The cell arena, the three group partitions and assignment propagation.
pub mod grid;

/// Rows, columns and blocks as ordered views over the cell arena.
pub mod group;

/// Puzzle text parsing and example puzzles.
pub mod parse;

/// The backtracking search engine.
pub mod search;

/// The deduction engine: naked singles and hidden singles to a fixed point.
pub mod solver;
