//! The deduction engine.
//!
//! One [`Grid::solve_step`] applies, in strict priority order, the first rule
//! that makes progress: naked singles over all cells in index order, then
//! hidden singles over rows, columns and blocks in that order. A successful
//! step returns immediately; the next step restarts the scan from scratch,
//! since the propagation triggered by an assignment may change the answer
//! for every later value. [`Grid::solve`] drives this to a fixed point and
//! hands whatever is left to the backtracking engine.

use crate::sudoku::grid::Grid;
use crate::sudoku::group::GroupKind;
use std::fmt::{self, Display, Formatter};

/// Options recognised by [`Grid::solve`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SolveOptions {
    /// Emit a diagnostic message and the grid after every deduction step and
    /// each backtracking trial. Solving behaves identically either way.
    pub print_steps: bool,
    /// Run only the deduction engine; never fall back to backtracking.
    pub deduce_only: bool,
    /// Skip deduction and go straight to backtracking after the initial
    /// given-propagation.
    pub dont_deduce: bool,
}

/// Outcome of a single deduction attempt.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SolveResult {
    /// Whether the attempt assigned a new value.
    pub found_new: bool,
    /// Diagnostic naming the rule, the cell and the value; empty when
    /// nothing was found.
    pub message: String,
}

impl Display for SolveResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Grid {
    /// Applies the naked-single rule to the cell at `index`: if exactly one
    /// candidate remains, commits it through [`Grid::assign`].
    ///
    /// Returns whether an assignment occurred.
    pub fn solve_cell(&mut self, index: usize) -> bool {
        let Some(value) = self.cells[index].naked_single_value(self.max_value()) else {
            return false;
        };
        self.assign(index, value);
        true
    }

    /// Scans one group for a hidden single without mutating anything.
    ///
    /// Values are tried in ascending order. A value some member already
    /// holds is fully placed in this group and is skipped; otherwise, if
    /// exactly one unsolved member does not exclude it, that member is the
    /// unique legal position.
    fn find_hidden_single(&self, kind: GroupKind, ordinal: usize) -> Option<(usize, usize)> {
        let group = match kind {
            GroupKind::Row => self.row(ordinal),
            GroupKind::Column => self.column(ordinal),
            GroupKind::Block => self.block(ordinal),
        };

        'values: for value in 1..=self.max_value() {
            let mut deduced = None;
            for &member in &group.cells {
                let cell = &self.cells[member];
                if cell.value == value {
                    continue 'values;
                }
                if cell.is_solved() {
                    continue;
                }
                if !cell.excluded.is_excluded(value) {
                    if deduced.is_some() {
                        continue 'values;
                    }
                    deduced = Some(member);
                }
            }
            if let Some(index) = deduced {
                return Some((index, value));
            }
        }
        None
    }

    /// Applies the hidden-single rule to one group, committing the first
    /// value (ascending) that has a unique legal position and returning
    /// immediately.
    ///
    /// The first success wins; later values are left for the next step, when
    /// the propagation of this assignment has settled.
    pub fn solve_group(&mut self, kind: GroupKind, ordinal: usize) -> SolveResult {
        let Some((index, value)) = self.find_hidden_single(kind, ordinal) else {
            return SolveResult::default();
        };

        let label = match kind {
            GroupKind::Row => self.row(ordinal).label(),
            GroupKind::Column => self.column(ordinal).label(),
            GroupKind::Block => self.block(ordinal).label(),
        };
        self.assign(index, value);
        SolveResult {
            found_new: true,
            message: format!("Deduced by checking {label}: cell {index} must be {value}"),
        }
    }

    /// Performs one deduction step and stops at the first success.
    ///
    /// Order: re-propagate every solved cell, then naked singles over all
    /// cells in index order, then hidden singles over all rows, all columns
    /// and all blocks. Returns `found_new = false` once nothing applies; at
    /// that point repeated calls are a fixed point, because deduction can
    /// only add exclusions, never retract them.
    pub fn solve_step(&mut self) -> SolveResult {
        self.reason_from_givens();

        for index in 0..self.cells.len() {
            if self.cells[index].is_solved() {
                continue;
            }
            if self.solve_cell(index) {
                let value = self.cells[index].value;
                return SolveResult {
                    found_new: true,
                    message: format!(
                        "Cell {index} could be deduced because there was only one possible value left, which is {value}"
                    ),
                };
            }
        }

        for kind in [GroupKind::Row, GroupKind::Column, GroupKind::Block] {
            for ordinal in 0..self.max_value() {
                let result = self.solve_group(kind, ordinal);
                if result.found_new {
                    return result;
                }
            }
        }

        SolveResult::default()
    }

    /// Solves the puzzle as far as possible.
    ///
    /// Propagates the givens, runs deduction steps until the grid is solved
    /// or a step finds nothing (skipped with
    /// [`SolveOptions::dont_deduce`]), then falls back to backtracking
    /// (skipped with [`SolveOptions::deduce_only`]).
    ///
    /// Always returns. An unsolvable puzzle is not an error; check
    /// [`Grid::is_solved`] and [`Grid::is_valid_solution`] afterwards.
    pub fn solve(&mut self, options: &SolveOptions) {
        self.reason_from_givens();

        if !options.dont_deduce {
            let mut result = SolveResult {
                found_new: true,
                message: String::new(),
            };
            while !self.is_solved() && result.found_new {
                result = self.solve_step();
                if options.print_steps {
                    println!("{result}");
                    println!("{self}");
                }
            }
        }

        if !self.is_solved() && !options.deduce_only {
            self.solve_brute(options);
        }
    }
}
