//! Positional access to the members of a [`RangeSet`].

use std::ops::{Range, RangeBounds};

use crate::range_set::{RangeSet, half_open_saturating, range_len};

/// An opaque, totally ordered position within a [`RangeSet`].
///
/// A `RangeIndex` addresses a member by the stored range it falls in and its
/// offset from that range's start. Indices are ordered the same way as the
/// members they denote, with [`RangeSet::end_index`] after all of them.
///
/// An index is only meaningful for the set value that produced it. Any
/// mutation may renumber ranges, so indices taken before a mutation must not
/// be used afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RangeIndex {
    range: usize,
    offset: u64,
}

impl RangeIndex {
    #[inline]
    pub(crate) const fn new(range: usize, offset: u64) -> RangeIndex {
        RangeIndex { range, offset }
    }

    /// Position of the stored range this index points into.
    #[inline]
    pub fn range_position(&self) -> usize {
        self.range
    }

    /// Offset of the addressed member from the start of its range.
    #[inline]
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl RangeSet {
    /// Index of the lowest member; equal to [`end_index`](Self::end_index)
    /// when the set is empty.
    #[inline]
    pub fn start_index(&self) -> RangeIndex {
        RangeIndex::new(0, 0)
    }

    /// The past-the-end index.
    #[inline]
    pub fn end_index(&self) -> RangeIndex {
        RangeIndex::new(self.range_count(), 0)
    }

    /// Index of the member following the one at `index`, or
    /// [`end_index`](Self::end_index) after the last member.
    ///
    /// Returns `None` when `index` is the end index or does not address a
    /// member of this set.
    pub fn checked_index_after(&self, index: RangeIndex) -> Option<RangeIndex> {
        let range = self.as_ranges().get(index.range)?;
        let next = index.offset.checked_add(1)?;
        if next < range_len(range) {
            Some(RangeIndex::new(index.range, next))
        } else if next == range_len(range) {
            Some(RangeIndex::new(index.range + 1, 0))
        } else {
            None
        }
    }

    /// Index of the member preceding the one at `index` (which may be the end
    /// index).
    ///
    /// Returns `None` when `index` is the start index or is not a valid index
    /// of this set.
    pub fn checked_index_before(&self, index: RangeIndex) -> Option<RangeIndex> {
        if !self.is_valid_index(index) {
            return None;
        }
        if index.offset > 0 {
            return Some(RangeIndex::new(index.range, index.offset - 1));
        }
        let prev = index.range.checked_sub(1)?;
        let range = &self.as_ranges()[prev];
        Some(RangeIndex::new(prev, range_len(range) - 1))
    }

    /// Index of the member following the one at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is the end index or does not address a member.
    pub fn index_after(&self, index: RangeIndex) -> RangeIndex {
        self.checked_index_after(index)
            .unwrap_or_else(|| panic!("cannot advance {index:?} past the end of {self:?}"))
    }

    /// Index of the member preceding the one at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is the start index or is not a valid index.
    pub fn index_before(&self, index: RangeIndex) -> RangeIndex {
        self.checked_index_before(index)
            .unwrap_or_else(|| panic!("cannot move {index:?} before the start of {self:?}"))
    }

    /// Member at `index`, or `None` for the end index and invalid indices.
    #[inline]
    pub fn get(&self, index: RangeIndex) -> Option<u64> {
        let range = self.as_ranges().get(index.range)?;
        (index.offset < range_len(range)).then(|| range.start + index.offset)
    }

    /// Member at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` does not address a member of this set.
    pub fn value_at(&self, index: RangeIndex) -> u64 {
        self.get(index)
            .unwrap_or_else(|| panic!("{index:?} does not address a member of {self:?}"))
    }

    /// Index of `value`, when it is a member.
    pub fn index_of(&self, value: u64) -> Option<RangeIndex> {
        let pos = self.range_containing(value)?;
        let start = self.as_ranges()[pos].start;
        Some(RangeIndex::new(pos, value - start))
    }

    /// Indices of the members whose values fall inside `bounds`.
    ///
    /// The result is empty (`start == end`) when no member falls inside
    /// `bounds`, and spans `start_index()..end_index()` when `bounds` covers
    /// every member.
    pub fn index_range<R: RangeBounds<u64>>(&self, bounds: R) -> Range<RangeIndex> {
        let bounds = half_open_saturating(bounds);
        let lower = self.index_at_or_after(bounds.start);
        let hits = bounds.start < bounds.end && self.get(lower).is_some_and(|v| v < bounds.end);
        if !hits {
            return lower..lower;
        }
        lower..self.index_at_or_after(bounds.end)
    }

    /// Index of the smallest member `>= value`, or the end index.
    fn index_at_or_after(&self, value: u64) -> RangeIndex {
        let ranges = self.as_ranges();
        let pos = ranges.partition_point(|r| r.end <= value);
        match ranges.get(pos) {
            Some(range) => RangeIndex::new(pos, value.saturating_sub(range.start)),
            None => self.end_index(),
        }
    }

    /// Number of members from `range.start` up to, but excluding, `range.end`.
    ///
    /// # Panics
    ///
    /// Panics if either index is invalid or `range.start > range.end`.
    pub fn distance(&self, range: Range<RangeIndex>) -> u64 {
        assert!(
            self.is_valid_index(range.start) && self.is_valid_index(range.end),
            "invalid index range {range:?} for {self:?}"
        );
        assert!(range.start <= range.end, "reversed index range {range:?}");
        let ranges = self.as_ranges();
        if range.start.range == range.end.range {
            return range.end.offset - range.start.offset;
        }
        let head = range_len(&ranges[range.start.range]) - range.start.offset;
        let middle: u64 = ranges[range.start.range + 1..range.end.range]
            .iter()
            .map(range_len)
            .sum();
        head + middle + range.end.offset
    }

    /// Returns `true` for indices of members and for the end index.
    pub(crate) fn is_valid_index(&self, index: RangeIndex) -> bool {
        index == self.end_index() || self.get(index).is_some()
    }
}
