//! Incremental construction of a [`RangeSet`] from ascending input.

use std::ops::Range;

use crate::range_set::{RangeSet, range_len};

/// Builds a [`RangeSet`] from values or ranges supplied in ascending order
/// of their start.
///
/// Overlapping and adjacent input is coalesced on the fly, so the result
/// always satisfies the range list invariant without a separate
/// normalization pass.
#[derive(Debug, Default)]
pub struct RangeSetBuilder {
    ranges: Vec<Range<u64>>,
    count: u64,
}

impl RangeSetBuilder {
    pub fn new() -> RangeSetBuilder {
        RangeSetBuilder::default()
    }

    /// Appends a single value.
    ///
    /// `value` must not be below the start of the last pushed range.
    ///
    /// # Panics
    ///
    /// Panics if `value` is `u64::MAX`.
    #[inline]
    pub fn push(&mut self, value: u64) {
        assert!(value < u64::MAX, "u64::MAX cannot be stored");
        self.push_range(value..value + 1);
    }

    /// Appends a range, merging it into the last one when they overlap or
    /// touch. Empty ranges are ignored.
    ///
    /// `range.start` must not be below the start of the last pushed range.
    pub fn push_range(&mut self, range: Range<u64>) {
        if range.start >= range.end {
            return;
        }
        match self.ranges.last_mut() {
            Some(last) if range.start <= last.end => {
                debug_assert!(
                    range.start >= last.start,
                    "ranges must be pushed in ascending order: {last:?}, {range:?}"
                );
                if range.end > last.end {
                    self.count += range.end - last.end;
                    last.end = range.end;
                }
            }
            last => {
                debug_assert!(
                    last.is_none_or(|last| range.start >= last.start),
                    "ranges must be pushed in ascending order"
                );
                self.count += range_len(&range);
                self.ranges.push(range);
            }
        }
    }

    /// Appends every range of an ascending stream.
    pub fn extend_ranges(&mut self, ranges: impl IntoIterator<Item = Range<u64>>) {
        for range in ranges {
            self.push_range(range);
        }
    }

    pub fn build(self) -> RangeSet {
        log::trace!(
            "built range set: {} ranges, {} integers",
            self.ranges.len(),
            self.count
        );
        RangeSet::from_parts(self.ranges)
    }
}

#[cfg(test)]
mod tests {
    use super::RangeSetBuilder;

    #[test]
    fn test_builder_coalesces_adjacent_values() {
        let mut builder = RangeSetBuilder::new();
        for v in [1, 2, 3, 7, 8, 20] {
            builder.push(v);
        }
        let set = builder.build();
        assert_eq!(set.count(), 6);
        assert_eq!(set.as_ranges(), &[1..4, 7..9, 20..21]);
        set.check_full_invariants();
    }

    #[test]
    fn test_builder_merges_overlapping_ranges() {
        let mut builder = RangeSetBuilder::new();
        builder.push_range(10..20);
        builder.push_range(12..15);
        builder.push_range(15..25);
        builder.push_range(25..30);
        builder.push_range(30..30);
        builder.push_range(40..41);
        let set = builder.build();
        assert_eq!(set.as_ranges(), &[10..30, 40..41]);
        assert_eq!(set.count(), 21);
        set.check_full_invariants();
    }

    #[test]
    fn test_empty_builder() {
        let builder = RangeSetBuilder::new();
        let set = builder.build();
        assert!(set.is_empty());
        assert_eq!(set.count(), 0);
    }
}
