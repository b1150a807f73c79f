//! A single grid position.
//!
//! Cells live in the grid's arena and are referenced by index from every
//! group they belong to. A cell never assigns its own value: the naked-single
//! scan here only *detects* the forced value, and the grid commits it so the
//! row/column/block consequences always propagate (see `Grid::assign`).

use crate::sudoku::candidates::ExclusionSet;
use smallvec::SmallVec;

/// Candidate values for one cell, inline up to a 9×9 grid.
pub type CandidateValues = SmallVec<[usize; 9]>;

/// One position of the grid: its arena index, its assigned value
/// (`0` = unknown) and the set of values ruled out for it.
///
/// Once `value` is non-zero the cell is terminal and its exclusion set is no
/// longer consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Position of this cell in the grid's cell arena.
    pub index: usize,
    /// Assigned value, or `0` while unknown.
    pub value: usize,
    /// Values ruled out for this cell by propagation.
    pub excluded: ExclusionSet,
}

impl Cell {
    /// Creates a cell with no exclusions. `value` is `0` for a blank cell.
    #[must_use]
    pub fn new(index: usize, value: usize, max_value: usize) -> Self {
        Self {
            index,
            value,
            excluded: ExclusionSet::new(max_value),
        }
    }

    /// Whether this cell has an assigned value.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.value != 0
    }

    /// Whether this cell is a naked single: still unsolved, with exactly one
    /// candidate value left.
    #[must_use]
    pub fn is_naked_single(&self, max_value: usize) -> bool {
        !self.is_solved() && self.excluded.excluded_count() == max_value - 1
    }

    /// The forced value of a naked single, found by a linear scan over
    /// `1..=max_value` skipping excluded values.
    ///
    /// Returns `None` unless the cell is a naked single. The caller (the
    /// grid) is responsible for committing the assignment.
    #[must_use]
    pub fn naked_single_value(&self, max_value: usize) -> Option<usize> {
        if !self.is_naked_single(max_value) {
            return None;
        }
        (1..=max_value).find(|&v| !self.excluded.is_excluded(v))
    }

    /// All values in `[1, max_value]` not yet ruled out, in ascending order.
    ///
    /// Used exclusively by the backtracking engine; deduction only ever needs
    /// the cardinality.
    #[must_use]
    pub fn possible_values(&self, max_value: usize) -> CandidateValues {
        (1..=max_value)
            .filter(|&v| !self.excluded.is_excluded(v))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_possible_values_shrink_with_exclusions() {
        let max_value = 4;
        let mut cell = Cell::new(0, 0, max_value);
        assert_eq!(cell.possible_values(max_value).len(), 4);

        cell.excluded.exclude(1);
        let values = cell.possible_values(max_value);
        assert_eq!(values.as_slice(), &[2, 3, 4]);
    }

    #[test]
    fn test_naked_single_requires_all_but_one_excluded() {
        let max_value = 4;
        let mut cell = Cell::new(0, 0, max_value);

        assert!(!cell.is_naked_single(max_value));
        cell.excluded.exclude(1);
        assert!(!cell.is_naked_single(max_value));
        cell.excluded.exclude(2);
        assert!(!cell.is_naked_single(max_value));
        cell.excluded.exclude(3);
        assert!(cell.is_naked_single(max_value));
        assert_eq!(cell.naked_single_value(max_value), Some(4));
    }

    #[test]
    fn test_solved_cell_is_not_a_naked_single() {
        let max_value = 4;
        let mut cell = Cell::new(0, 2, max_value);
        cell.excluded.exclude(1);
        cell.excluded.exclude(3);
        cell.excluded.exclude(4);
        assert!(cell.is_solved());
        assert!(!cell.is_naked_single(max_value));
        assert_eq!(cell.naked_single_value(max_value), None);
    }
}
