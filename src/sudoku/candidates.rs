//! Exclusion sets: the candidate bookkeeping behind deduction.
//!
//! The set stores values that are ruled *out* for a cell rather than the
//! values that remain. An empty set therefore means "anything is still
//! possible", and the naked-single check reduces to comparing the excluded
//! cardinality against `max_value - 1`. Exclusions only ever accumulate;
//! there is deliberately no removal operation.

use bit_vec::BitVec;

/// A monotonically growing set of values in `[1, max_value]` that are ruled
/// out for one cell.
///
/// Backed by a bit per candidate value plus a cached cardinality, so both
/// membership tests and the remaining-candidate count are O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    bits: BitVec,
    count: usize,
}

impl ExclusionSet {
    /// Creates an empty exclusion set for values `1..=max_value`.
    #[must_use]
    pub fn new(max_value: usize) -> Self {
        Self {
            bits: BitVec::from_elem(max_value, false),
            count: 0,
        }
    }

    /// Rules out `value`.
    ///
    /// Returns `true` iff the value was not already excluded. Excluding a
    /// value twice is a no-op, not an error.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `value` is outside `1..=max_value`.
    pub fn exclude(&mut self, value: usize) -> bool {
        debug_assert!(value >= 1 && value <= self.bits.len());
        if self.is_excluded(value) {
            return false;
        }
        self.bits.set(value - 1, true);
        self.count += 1;
        true
    }

    /// Checks whether `value` has been ruled out.
    #[must_use]
    pub fn is_excluded(&self, value: usize) -> bool {
        self.bits.get(value - 1).unwrap_or(false)
    }

    /// The number of values ruled out so far.
    #[must_use]
    pub const fn excluded_count(&self) -> usize {
        self.count
    }

    /// The number of candidate values not yet ruled out.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.bits.len() - self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_set_excludes_nothing() {
        let set = ExclusionSet::new(9);
        assert_eq!(set.excluded_count(), 0);
        assert_eq!(set.remaining_count(), 9);
        for v in 1..=9 {
            assert!(!set.is_excluded(v));
        }
    }

    #[test]
    fn test_exclude_reports_newness() {
        let mut set = ExclusionSet::new(4);
        assert!(set.exclude(3), "first exclusion should be new");
        assert!(!set.exclude(3), "repeated exclusion should not be new");
        assert!(set.is_excluded(3));
        assert_eq!(set.excluded_count(), 1);
        assert_eq!(set.remaining_count(), 3);
    }

    #[test]
    fn test_exclusions_accumulate() {
        let mut set = ExclusionSet::new(4);
        set.exclude(1);
        set.exclude(2);
        set.exclude(4);
        assert_eq!(set.remaining_count(), 1);
        assert!(!set.is_excluded(3));
    }

    #[test]
    fn test_duplicate_exclusion_leaves_counts_unchanged() {
        let mut set = ExclusionSet::new(9);
        set.exclude(7);
        let before = set.excluded_count();
        set.exclude(7);
        assert_eq!(set.excluded_count(), before);
        assert_eq!(set.remaining_count(), 8);
    }
}
