//! Rows, columns and blocks.
//!
//! A group is an ordered view over `max_value` cells of the grid arena,
//! stored as indices rather than references so that all three partitions can
//! alias the same mutable cells. Every cell belongs to exactly one row, one
//! column and one block.

use std::fmt::{self, Display, Formatter};

/// Which of the three partitions a group belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKind {
    /// Cells sharing a row index.
    Row,
    /// Cells sharing a column index.
    Column,
    /// Cells sharing a √N×√N sub-square.
    Block,
}

impl Display for GroupKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "col"),
            Self::Block => write!(f, "block"),
        }
    }
}

/// One row, column or block: `max_value` cell indices in group order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// The partition this group belongs to.
    pub kind: GroupKind,
    /// Position of this group within its partition (e.g. row number).
    pub ordinal: usize,
    /// Arena indices of the member cells, in group order.
    pub cells: Vec<usize>,
}

impl Group {
    /// Creates a group with slots for `len` cells, initially unset.
    #[must_use]
    pub fn new(kind: GroupKind, ordinal: usize, len: usize) -> Self {
        Self {
            kind,
            ordinal,
            cells: vec![0; len],
        }
    }

    /// Human-readable name used in deduction diagnostics, e.g. `"row 3"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.kind, self.ordinal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Group::new(GroupKind::Row, 0, 4).label(), "row 0");
        assert_eq!(Group::new(GroupKind::Column, 2, 4).label(), "col 2");
        assert_eq!(Group::new(GroupKind::Block, 3, 4).label(), "block 3");
    }
}
