//! The grid: cell arena, partitions and assignment propagation.
//!
//! `Grid::assign` is the single mutation path for cell values. Both
//! deduction rules route through it, so every assignment excludes its value
//! from the rest of the row, column and block before the next deduction
//! attempt runs.

use crate::sudoku::cell::Cell;
use crate::sudoku::error::SudokuError;
use crate::sudoku::group::{Group, GroupKind};
use itertools::Itertools;
use rustc_hash::FxHashSet;
use std::fmt::{self, Display, Formatter};

/// A Sudoku grid of block edge length `size`: `size²` values per group,
/// `size⁴` cells in total.
///
/// The grid owns every cell; the row, column and block groups hold indices
/// into the arena, never copies, so a single assignment is visible through
/// all three partitions at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    max_value: usize,
    field_width: usize,
    pub(crate) cells: Vec<Cell>,
    pub(crate) rows: Vec<Group>,
    pub(crate) cols: Vec<Group>,
    pub(crate) blocks: Vec<Group>,
}

impl Grid {
    /// Creates an empty grid of block edge length `size`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let max_value = size * size;
        let cell_count = max_value * max_value;
        let field_width = max_value.to_string().len();

        let cells = (0..cell_count)
            .map(|index| Cell::new(index, 0, max_value))
            .collect_vec();

        let mut rows = (0..max_value)
            .map(|i| Group::new(GroupKind::Row, i, max_value))
            .collect_vec();
        let mut cols = (0..max_value)
            .map(|i| Group::new(GroupKind::Column, i, max_value))
            .collect_vec();
        let mut blocks = (0..max_value)
            .map(|i| Group::new(GroupKind::Block, i, max_value))
            .collect_vec();

        for row in 0..max_value {
            for col in 0..max_value {
                let index = row * max_value + col;
                rows[row].cells[col] = index;
                cols[col].cells[row] = index;

                let block_index = (row / size) * size + col / size;
                let inner = (row % size) * size + col % size;
                blocks[block_index].cells[inner] = index;
            }
        }

        Self {
            size,
            max_value,
            field_width,
            cells,
            rows,
            cols,
            blocks,
        }
    }

    /// Creates a grid seeded with `values`, one per cell in row-major order,
    /// `0` meaning blank.
    ///
    /// # Errors
    ///
    /// Returns [`SudokuError::InvalidInput`] if `values.len() != size⁴` and
    /// [`SudokuError::InvalidValue`] if any seed value exceeds `size²`; the
    /// constructor never truncates or indexes past the supplied slice.
    pub fn with_givens(size: usize, values: &[usize]) -> Result<Self, SudokuError> {
        let mut grid = Self::new(size);
        let expected = grid.cells.len();
        if values.len() != expected {
            return Err(SudokuError::InvalidInput {
                size,
                expected,
                actual: values.len(),
            });
        }
        for (index, &value) in values.iter().enumerate() {
            if value > grid.max_value {
                return Err(SudokuError::InvalidValue {
                    index,
                    value,
                    max_value: grid.max_value,
                });
            }
            grid.cells[index].value = value;
        }
        Ok(grid)
    }

    /// Block edge length N.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Largest cell value, N².
    #[must_use]
    pub const fn max_value(&self) -> usize {
        self.max_value
    }

    /// The cell at `index`.
    #[must_use]
    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The assigned values of all cells in row-major order, `0` for blanks.
    #[must_use]
    pub fn values(&self) -> Vec<usize> {
        self.cells.iter().map(|c| c.value).collect()
    }

    /// Row index of the cell at `index`.
    #[must_use]
    pub const fn row_of(&self, index: usize) -> usize {
        index / self.max_value
    }

    /// Column index of the cell at `index`.
    #[must_use]
    pub const fn col_of(&self, index: usize) -> usize {
        index % self.max_value
    }

    /// Block index of the cell at `index`.
    #[must_use]
    pub const fn block_of(&self, index: usize) -> usize {
        (self.row_of(index) / self.size) * self.size + self.col_of(index) / self.size
    }

    /// The group of `kind` containing the cell at `index`.
    #[must_use]
    pub fn group_of(&self, kind: GroupKind, index: usize) -> &Group {
        match kind {
            GroupKind::Row => &self.rows[self.row_of(index)],
            GroupKind::Column => &self.cols[self.col_of(index)],
            GroupKind::Block => &self.blocks[self.block_of(index)],
        }
    }

    /// The row group with the given ordinal.
    #[must_use]
    pub fn row(&self, ordinal: usize) -> &Group {
        &self.rows[ordinal]
    }

    /// The column group with the given ordinal.
    #[must_use]
    pub fn column(&self, ordinal: usize) -> &Group {
        &self.cols[ordinal]
    }

    /// The block group with the given ordinal.
    #[must_use]
    pub fn block(&self, ordinal: usize) -> &Group {
        &self.blocks[ordinal]
    }

    /// Commits `value` to the cell at `index` and propagates the
    /// consequences: the value is excluded from every still-unsolved cell
    /// sharing the row, the column or the block.
    ///
    /// This is the sole path that changes a cell's value during deduction.
    /// Re-assigning the same value is idempotent since re-excluding an
    /// already-excluded value is a no-op.
    pub fn assign(&mut self, index: usize, value: usize) {
        self.cells[index].value = value;

        for kind in [GroupKind::Row, GroupKind::Column, GroupKind::Block] {
            let members = self.group_of(kind, index).cells.clone();
            for member in members {
                let cell = &mut self.cells[member];
                if cell.is_solved() {
                    continue;
                }
                cell.excluded.exclude(value);
            }
        }
    }

    /// Re-commits every already-solved cell so that all givens have
    /// propagated their exclusions.
    ///
    /// Needed after seeding: writing the initial values one by one does not
    /// cross-propagate between them.
    pub fn reason_from_givens(&mut self) {
        for index in 0..self.cells.len() {
            if self.cells[index].is_solved() {
                let value = self.cells[index].value;
                self.assign(index, value);
            }
        }
    }

    /// Whether every cell holds a value. Says nothing about validity.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Cell::is_solved)
    }

    /// Number of cells with an assigned value.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_solved()).count()
    }

    /// Arena indices of all unsolved cells, in index order.
    #[must_use]
    pub fn unsolved_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .filter(|c| !c.is_solved())
            .map(|c| c.index)
            .collect()
    }

    /// Checks every row, column and block for exactly `max_value` distinct
    /// solved values.
    ///
    /// Used to validate backtracking leaves, where assignments bypass the
    /// exclusion bookkeeping; deduction never needs this check.
    #[must_use]
    pub fn is_valid_solution(&self) -> bool {
        self.rows
            .iter()
            .chain(&self.cols)
            .chain(&self.blocks)
            .all(|group| {
                let values: FxHashSet<usize> = group
                    .cells
                    .iter()
                    .map(|&i| &self.cells[i])
                    .filter(|c| c.is_solved())
                    .map(|c| c.value)
                    .collect();
                values.len() == self.max_value
            })
    }

    /// Whether `value` could be placed at `index` right now: no cell sharing
    /// the row, column or block currently holds it.
    #[must_use]
    pub fn can_place(&self, index: usize, value: usize) -> bool {
        [GroupKind::Row, GroupKind::Column, GroupKind::Block]
            .iter()
            .all(|&kind| {
                self.group_of(kind, index)
                    .cells
                    .iter()
                    .all(|&member| self.cells[member].value != value)
            })
    }

    /// One cell rendered for display: `.` for a blank, otherwise the value
    /// right-aligned to the decimal width of `max_value`.
    fn cell_text(&self, index: usize) -> String {
        let cell = &self.cells[index];
        if cell.value == 0 {
            ".".to_string()
        } else {
            format!("{:>width$}", cell.value, width = self.field_width)
        }
    }

    /// Borderless rendering: one line per row, cells concatenated.
    ///
    /// Unlike the bordered [`Display`] output, this form round-trips through
    /// the puzzle parser for solved single-digit grids.
    #[must_use]
    pub fn compact(&self) -> String {
        (0..self.max_value)
            .map(|row| {
                (0..self.max_value)
                    .map(|col| self.cell_text(row * self.max_value + col))
                    .join("")
            })
            .join("\n")
    }
}

impl Display for Grid {
    /// Renders the grid with `+`/`-`/`|` borders sized to the block edge
    /// length.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let border = format!("+{}", format!("{}+", "-".repeat(self.size)).repeat(self.size));
        writeln!(f, "{border}")?;
        for row in 0..self.max_value {
            write!(f, "|")?;
            for col in 0..self.max_value {
                write!(f, "{}", self.cell_text(row * self.max_value + col))?;
                if col % self.size == self.size - 1 {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if row % self.size == self.size - 1 {
                writeln!(f, "{border}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_construction() {
        let grid = Grid::new(2);
        assert_eq!(grid.max_value(), 4);
        assert_eq!(grid.cells().len(), 16);

        assert_eq!(grid.row(0).cells, vec![0, 1, 2, 3]);
        assert_eq!(grid.column(0).cells, vec![0, 4, 8, 12]);
        assert_eq!(grid.block(0).cells, vec![0, 1, 4, 5]);
        assert_eq!(grid.block(3).cells, vec![10, 11, 14, 15]);
    }

    #[test]
    fn test_index_math() {
        let grid = Grid::new(3);
        // cell 40 is the centre of a 9x9 grid
        assert_eq!(grid.row_of(40), 4);
        assert_eq!(grid.col_of(40), 4);
        assert_eq!(grid.block_of(40), 4);
        assert_eq!(grid.block_of(80), 8);
        assert_eq!(grid.block_of(0), 0);
    }

    #[test]
    fn test_with_givens_rejects_bad_length() {
        let err = Grid::with_givens(2, &[1, 2, 3]).unwrap_err();
        assert!(matches!(
            err,
            SudokuError::InvalidInput {
                size: 2,
                expected: 16,
                actual: 3,
            }
        ));
    }

    #[test]
    fn test_with_givens_rejects_out_of_range_value() {
        let mut values = vec![0; 16];
        values[5] = 7;
        let err = Grid::with_givens(2, &values).unwrap_err();
        assert!(matches!(
            err,
            SudokuError::InvalidValue {
                index: 5,
                value: 7,
                max_value: 4,
            }
        ));
    }

    #[test]
    fn test_assign_propagates_to_all_partitions() {
        let mut grid = Grid::new(2);
        grid.assign(0, 3);

        // same row
        assert!(grid.cell(1).excluded.is_excluded(3));
        assert!(grid.cell(3).excluded.is_excluded(3));
        // same column
        assert!(grid.cell(4).excluded.is_excluded(3));
        assert!(grid.cell(12).excluded.is_excluded(3));
        // same block
        assert!(grid.cell(5).excluded.is_excluded(3));
        // unrelated cell
        assert!(!grid.cell(10).excluded.is_excluded(3));
    }

    #[test]
    fn test_assign_twice_is_idempotent() {
        let mut grid = Grid::new(2);
        grid.assign(0, 3);
        let snapshot: Vec<usize> = grid
            .cells()
            .iter()
            .map(|c| c.excluded.excluded_count())
            .collect();

        grid.assign(0, 3);
        let after: Vec<usize> = grid
            .cells()
            .iter()
            .map(|c| c.excluded.excluded_count())
            .collect();
        assert_eq!(snapshot, after);
    }

    #[test]
    fn test_is_valid_solution() {
        let solved = [
            1, 2, 3, 4, //
            3, 4, 2, 1, //
            2, 1, 4, 3, //
            4, 3, 1, 2,
        ];
        let grid = Grid::with_givens(2, &solved).unwrap();
        assert!(grid.is_solved());
        assert!(grid.is_valid_solution());

        // swap two cells in the first row: still full, no longer valid
        let mut broken = solved;
        broken[0] = 2;
        broken[1] = 1;
        let grid = Grid::with_givens(2, &broken).unwrap();
        assert!(grid.is_solved());
        assert!(!grid.is_valid_solution());
    }

    #[test]
    fn test_can_place_checks_all_partitions() {
        let mut grid = Grid::new(2);
        grid.cells[1].value = 2; // row peer of cell 0
        grid.cells[8].value = 3; // column peer of cell 0
        grid.cells[5].value = 4; // block peer of cell 0

        assert!(!grid.can_place(0, 2));
        assert!(!grid.can_place(0, 3));
        assert!(!grid.can_place(0, 4));
        assert!(grid.can_place(0, 1));
    }

    #[test]
    fn test_display_draws_block_borders() {
        let values = [
            1, 2, 3, 4, //
            3, 4, 2, 1, //
            2, 1, 4, 3, //
            4, 3, 1, 2,
        ];
        let grid = Grid::with_givens(2, &values).unwrap();
        let expected = "\
+--+--+
|12|34|
|34|21|
+--+--+
|21|43|
|43|12|
+--+--+
";
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn test_display_renders_blanks_as_dots() {
        let mut values = vec![0; 16];
        values[0] = 1;
        let grid = Grid::with_givens(2, &values).unwrap();
        assert!(grid.to_string().starts_with("+--+--+\n|1.|..|"));
    }

    #[test]
    fn test_compact_has_no_borders() {
        let values = [
            1, 2, 3, 4, //
            3, 4, 2, 1, //
            2, 1, 4, 3, //
            4, 3, 1, 2,
        ];
        let grid = Grid::with_givens(2, &values).unwrap();
        assert_eq!(grid.compact(), "1234\n3421\n2143\n4312");
    }
}
