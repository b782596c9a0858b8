//! A sparse ordered set of non-negative integers stored as coalesced ranges.

use std::{
    ops::{Bound, Range, RangeBounds, RangeInclusive},
    sync::Arc,
};

use itertools::Itertools;
use rangeset_common::{Result, error::Error, result::verify_domain, verify_arg};
use rangeset_ops::{
    difference_ranges, intersect_ranges, symmetric_difference_ranges, union_ranges,
};

use crate::{builder::RangeSetBuilder, iter::Integers, range_view::RangeView};

/// A set of `u64` values stored as a sorted list of disjoint half-open ranges.
///
/// The range list is kept maximally coalesced after every operation:
/// - ranges are sorted ascending by `start`,
/// - no range is empty,
/// - no two ranges overlap or touch (`ranges[i].end < ranges[i + 1].start`).
///
/// Two sets are equal exactly when their range lists are equal.
///
/// `RangeSet` is a value type. The range list lives behind an `Arc`, so
/// `clone()` is O(1); the first mutation of a shared value copies the list,
/// leaving every other holder unaffected. Mutations that turn out to be
/// no-ops never copy.
///
/// Because a stored range needs an exclusive upper bound, the largest
/// storable integer is `u64::MAX - 1`.
///
/// Complexity overview (k = number of ranges):
/// - `contains`, `intersects`, neighbour queries, index lookups: O(log k)
/// - `insert` / `remove`: O(log k) to locate, plus O(k) to splice the list
/// - `union`, `intersection`, `symmetric_difference`, `subtracting`: O(k1 + k2)
/// - `count`: O(1)
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct RangeSet {
    ranges: Arc<Vec<Range<u64>>>,
    /// Number of integers in the set, kept in sync with `ranges`.
    count: u64,
}

impl RangeSet {
    /// Creates an empty set.
    pub fn new() -> RangeSet {
        RangeSet::default()
    }

    /// Creates a set holding every integer in `bounds`.
    ///
    /// # Panics
    ///
    /// Panics if `bounds` includes `u64::MAX`.
    pub fn from_range<R: RangeBounds<u64>>(bounds: R) -> RangeSet {
        let range = storable_range(bounds);
        if range.is_empty() {
            return RangeSet::new();
        }
        RangeSet::from_parts(vec![range])
    }

    /// Creates a set holding the single integer `value`.
    pub fn from_integer(value: u64) -> RangeSet {
        RangeSet::from_range(value..=value)
    }

    /// Creates a set from a list that already satisfies the range list
    /// invariant (sorted, non-empty, non-touching ranges), without re-sorting.
    ///
    /// Returns an `InvalidArgument` error if the list violates the invariant.
    pub fn from_sorted_ranges(ranges: Vec<Range<u64>>) -> Result<RangeSet> {
        if let Err(e) = verify_coalesced(&ranges) {
            log::debug!("rejected range list with {} ranges: {e}", ranges.len());
            return Err(e);
        }
        Ok(RangeSet::from_parts(ranges))
    }

    /// Wraps a list that is known to satisfy the invariant.
    pub(crate) fn from_parts(ranges: Vec<Range<u64>>) -> RangeSet {
        let count = ranges.iter().map(range_len).sum();
        RangeSet {
            ranges: Arc::new(ranges),
            count,
        }
    }

    /// Collects an already coalesced, ascending range stream.
    fn collect_coalesced(ranges: impl Iterator<Item = Range<u64>>) -> RangeSet {
        let mut builder = RangeSetBuilder::new();
        builder.extend_ranges(ranges);
        builder.build()
    }

    /// Number of integers in the set.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Number of stored (coalesced) ranges.
    #[inline]
    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    /// The stored ranges, in ascending order.
    #[inline]
    pub fn as_ranges(&self) -> &[Range<u64>] {
        &self.ranges
    }

    /// Lowest integer in the set.
    pub fn first(&self) -> Option<u64> {
        self.ranges.first().map(|r| r.start)
    }

    /// Highest integer in the set.
    pub fn last(&self) -> Option<u64> {
        self.ranges.last().map(|r| r.end - 1)
    }

    /// Index of the stored range containing `value`.
    #[inline]
    pub(crate) fn range_containing(&self, value: u64) -> Option<usize> {
        let idx = self.ranges.partition_point(|r| r.end <= value);
        match self.ranges.get(idx) {
            Some(r) if r.start <= value => Some(idx),
            _ => None,
        }
    }

    pub fn contains(&self, value: u64) -> bool {
        self.range_containing(value).is_some()
    }

    /// Returns `true` if every integer in `bounds` is in the set.
    ///
    /// An empty query range is always contained. A query that bridges a gap
    /// between two stored ranges is not. A query that includes `u64::MAX`
    /// is never contained, since `u64::MAX` cannot be stored.
    pub fn contains_range<R: RangeBounds<u64>>(&self, bounds: R) -> bool {
        let includes_max = matches!(bounds.end_bound(), Bound::Included(&u64::MAX))
            && !matches!(bounds.start_bound(), Bound::Excluded(&u64::MAX));
        if includes_max {
            return false;
        }
        let query = half_open_saturating(bounds);
        if query.start >= query.end {
            return true;
        }
        let idx = self.ranges.partition_point(|r| r.end <= query.start);
        self.ranges
            .get(idx)
            .is_some_and(|r| r.start <= query.start && query.end <= r.end)
    }

    /// Returns `true` if `other` is a subset of this set.
    pub fn contains_set(&self, other: &RangeSet) -> bool {
        if other.count > self.count {
            return false;
        }
        other.ranges.iter().all(|r| self.contains_range(r.clone()))
    }

    /// Returns `true` if some integer in `bounds` is in the set.
    ///
    /// An empty query range never intersects.
    pub fn intersects<R: RangeBounds<u64>>(&self, bounds: R) -> bool {
        let query = half_open_saturating(bounds);
        if query.start >= query.end {
            return false;
        }
        let idx = self.ranges.partition_point(|r| r.end <= query.start);
        self.ranges.get(idx).is_some_and(|r| r.start < query.end)
    }

    /// Returns `true` if the two sets share no integer.
    pub fn is_disjoint(&self, other: &RangeSet) -> bool {
        intersect_ranges(self.ranges.iter().cloned(), other.ranges.iter().cloned())
            .next()
            .is_none()
    }

    /// Number of integers of the set that fall inside `bounds`, computed
    /// without visiting individual integers.
    pub fn count_in<R: RangeBounds<u64>>(&self, bounds: R) -> u64 {
        self.range_view_of(bounds).count_positions()
    }

    /// Smallest member `>= value`.
    pub fn integer_greater_than_or_equal_to(&self, value: u64) -> Option<u64> {
        let idx = self.ranges.partition_point(|r| r.end <= value);
        self.ranges.get(idx).map(|r| r.start.max(value))
    }

    /// Smallest member `> value`.
    pub fn integer_greater_than(&self, value: u64) -> Option<u64> {
        value
            .checked_add(1)
            .and_then(|v| self.integer_greater_than_or_equal_to(v))
    }

    /// Largest member `<= value`.
    pub fn integer_less_than_or_equal_to(&self, value: u64) -> Option<u64> {
        let idx = self.ranges.partition_point(|r| r.start <= value);
        let range = self.ranges.get(idx.checked_sub(1)?)?;
        Some(value.min(range.end - 1))
    }

    /// Largest member `< value`.
    pub fn integer_less_than(&self, value: u64) -> Option<u64> {
        value
            .checked_sub(1)
            .and_then(|v| self.integer_less_than_or_equal_to(v))
    }

    /// Inserts `value`; returns `true` if it was not present before.
    ///
    /// # Panics
    ///
    /// Panics if `value` is `u64::MAX`.
    pub fn insert(&mut self, value: u64) -> bool {
        if self.contains(value) {
            return false;
        }
        self.insert_range(value..=value);
        true
    }

    /// Inserts every integer in `bounds`, merging with any stored range that
    /// overlaps or touches it.
    ///
    /// # Panics
    ///
    /// Panics if `bounds` includes `u64::MAX`.
    pub fn insert_range<R: RangeBounds<u64>>(&mut self, bounds: R) {
        let range = storable_range(bounds);
        if range.is_empty() {
            return;
        }

        // Stored ranges in lo..hi overlap or touch `range`.
        let lo = self.ranges.partition_point(|r| r.end < range.start);
        let hi = self.ranges.partition_point(|r| r.start <= range.end);

        let merged = if lo < hi {
            let head = &self.ranges[lo];
            if hi - lo == 1 && head.start <= range.start && range.end <= head.end {
                return;
            }
            head.start.min(range.start)..self.ranges[hi - 1].end.max(range.end)
        } else {
            range
        };

        let replaced: u64 = self.ranges[lo..hi].iter().map(range_len).sum();
        self.count = self.count - replaced + range_len(&merged);
        Arc::make_mut(&mut self.ranges).splice(lo..hi, std::iter::once(merged));
    }

    /// Removes `value`; returns `true` if it was present.
    pub fn remove(&mut self, value: u64) -> bool {
        if !self.contains(value) {
            return false;
        }
        self.remove_range(value..=value);
        true
    }

    /// Removes every integer in `bounds`.
    ///
    /// Stored ranges fully covered are dropped, ranges overlapping one edge are
    /// shortened, and a range strictly containing `bounds` is split in two.
    /// Removing absent integers is a no-op.
    pub fn remove_range<R: RangeBounds<u64>>(&mut self, bounds: R) {
        let range = half_open_saturating(bounds);
        if range.start >= range.end {
            return;
        }

        // Stored ranges in lo..hi intersect `range`.
        let lo = self.ranges.partition_point(|r| r.end <= range.start);
        let hi = self.ranges.partition_point(|r| r.start < range.end);
        if lo >= hi {
            return;
        }

        let head = self.ranges[lo].start..range.start;
        let tail = range.end..self.ranges[hi - 1].end;
        let kept: Vec<Range<u64>> = [head, tail]
            .into_iter()
            .filter(|r| r.start < r.end)
            .collect();

        let removed: u64 = self.ranges[lo..hi].iter().map(range_len).sum();
        let restored: u64 = kept.iter().map(range_len).sum();
        self.count = self.count - removed + restored;
        Arc::make_mut(&mut self.ranges).splice(lo..hi, kept);
    }

    /// Removes every integer from the set.
    pub fn remove_all(&mut self) {
        self.ranges = Arc::default();
        self.count = 0;
    }

    /// Integers present in either set.
    pub fn union(&self, other: &RangeSet) -> RangeSet {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        Self::collect_coalesced(union_ranges(
            self.ranges.iter().cloned(),
            other.ranges.iter().cloned(),
        ))
    }

    /// Integers present in both sets.
    pub fn intersection(&self, other: &RangeSet) -> RangeSet {
        if self.is_empty() || other.is_empty() {
            return RangeSet::new();
        }
        Self::collect_coalesced(intersect_ranges(
            self.ranges.iter().cloned(),
            other.ranges.iter().cloned(),
        ))
    }

    /// Integers present in exactly one of the two sets.
    pub fn symmetric_difference(&self, other: &RangeSet) -> RangeSet {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        Self::collect_coalesced(symmetric_difference_ranges(
            self.ranges.iter().cloned(),
            other.ranges.iter().cloned(),
        ))
    }

    /// Integers of this set that are not in `other`.
    pub fn subtracting(&self, other: &RangeSet) -> RangeSet {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }
        Self::collect_coalesced(difference_ranges(
            self.ranges.iter().cloned(),
            other.ranges.iter().cloned(),
        ))
    }

    pub fn form_union(&mut self, other: &RangeSet) {
        *self = self.union(other);
    }

    pub fn form_intersection(&mut self, other: &RangeSet) {
        *self = self.intersection(other);
    }

    pub fn form_symmetric_difference(&mut self, other: &RangeSet) {
        *self = self.symmetric_difference(other);
    }

    pub fn subtract(&mut self, other: &RangeSet) {
        *self = self.subtracting(other);
    }

    /// View over the stored ranges.
    pub fn range_view(&self) -> RangeView<'_> {
        RangeView::new(&self.ranges)
    }

    /// View over the portions of the stored ranges that fall inside `bounds`,
    /// with the ranges at both edges clipped.
    pub fn range_view_of<R: RangeBounds<u64>>(&self, bounds: R) -> RangeView<'_> {
        self.range_view().clamp(bounds)
    }

    /// Iterates the members in ascending order; `.rev()` iterates descending.
    pub fn iter(&self) -> Integers<'_> {
        self.range_view().integers()
    }

    /// Iterates the members that fall inside `bounds`, in either direction.
    pub fn iter_in<R: RangeBounds<u64>>(&self, bounds: R) -> Integers<'_> {
        self.range_view_of(bounds).integers()
    }

    /// Copies members inside `cursor` into `buf`, in ascending order, and
    /// returns how many were written.
    ///
    /// When at least one member was written, `cursor.start` is moved just past
    /// the last one, so repeated calls page through the set.
    pub fn get_integers(&self, buf: &mut [u64], cursor: &mut Range<u64>) -> usize {
        let mut written = 0;
        for (slot, value) in buf.iter_mut().zip(self.iter_in(cursor.clone())) {
            *slot = value;
            written += 1;
        }
        if written > 0 {
            cursor.start = buf[written - 1] + 1;
        }
        written
    }

    /// Members for which `predicate` returns `true`.
    pub fn filtered<F>(&self, predicate: F) -> RangeSet
    where
        F: FnMut(u64) -> bool,
    {
        self.filtered_in(.., predicate)
    }

    /// Members inside `bounds` for which `predicate` returns `true`.
    pub fn filtered_in<R, F>(&self, bounds: R, mut predicate: F) -> RangeSet
    where
        R: RangeBounds<u64>,
        F: FnMut(u64) -> bool,
    {
        let mut builder = RangeSetBuilder::new();
        for value in self.iter_in(bounds).filter(|&v| predicate(v)) {
            builder.push(value);
        }
        builder.build()
    }

    /// Asserts the range list invariant and the cached count.
    pub fn check_full_invariants(&self) {
        for r in self.ranges.iter() {
            assert!(r.start < r.end, "Empty range stored: {r:?}");
        }
        for (prev, next) in self.ranges.iter().tuple_windows() {
            assert!(
                prev.end < next.start,
                "Ranges must be sorted and non-touching: prev={prev:?}, next={next:?}"
            );
        }
        let count: u64 = self.ranges.iter().map(range_len).sum();
        assert_eq!(self.count, count, "Cached count is out of sync");
    }
}

fn verify_coalesced(ranges: &[Range<u64>]) -> Result<()> {
    verify_arg!(ranges, ranges.iter().all(|r| r.start < r.end));
    verify_arg!(
        ranges,
        ranges.iter().tuple_windows().all(|(a, b)| a.end < b.start)
    );
    Ok(())
}

#[inline]
pub(crate) fn range_len(range: &Range<u64>) -> u64 {
    range.end - range.start
}

/// Converts `bounds` to a half-open range, saturating at `u64::MAX`.
///
/// Suitable for queries and removals: nothing is ever stored at `u64::MAX`.
pub(crate) fn half_open_saturating<R: RangeBounds<u64>>(bounds: R) -> Range<u64> {
    let start = match bounds.start_bound() {
        Bound::Included(&n) => n,
        Bound::Excluded(&n) => n.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match bounds.end_bound() {
        Bound::Included(&n) => n.saturating_add(1),
        Bound::Excluded(&n) => n,
        Bound::Unbounded => u64::MAX,
    };
    start..end
}

/// Converts `bounds` to a half-open range that can be stored.
///
/// # Panics
///
/// Panics if `bounds` includes `u64::MAX`.
pub(crate) fn storable_range<R: RangeBounds<u64>>(bounds: R) -> Range<u64> {
    let includes_max = matches!(bounds.end_bound(), Bound::Included(&u64::MAX));
    let range = half_open_saturating(bounds);
    if includes_max {
        panic!(
            "range {}..=u64::MAX includes u64::MAX, which cannot be stored",
            range.start
        );
    }
    range
}

impl std::fmt::Debug for RangeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.ranges.iter()).finish()
    }
}

impl From<Range<u64>> for RangeSet {
    fn from(range: Range<u64>) -> Self {
        RangeSet::from_range(range)
    }
}

impl From<RangeInclusive<u64>> for RangeSet {
    fn from(range: RangeInclusive<u64>) -> Self {
        RangeSet::from_range(range)
    }
}

impl TryFrom<Range<i64>> for RangeSet {
    type Error = Error;

    fn try_from(range: Range<i64>) -> Result<Self> {
        if range.start >= range.end {
            return Ok(RangeSet::new());
        }
        let start = verify_domain(range.start as i128, "range starts below zero")
            .inspect_err(|e| log::debug!("rejected signed range {range:?}: {e}"))?;
        Ok(RangeSet::from_range(start..range.end as u64))
    }
}

impl TryFrom<Vec<i64>> for RangeSet {
    type Error = Error;

    fn try_from(values: Vec<i64>) -> Result<Self> {
        let values = values
            .into_iter()
            .map(|v| verify_domain(v as i128, "negative integer"))
            .collect::<Result<Vec<u64>>>()
            .inspect_err(|e| log::debug!("rejected signed values: {e}"))?;
        Ok(values.into_iter().collect())
    }
}

impl FromIterator<u64> for RangeSet {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        let mut builder = RangeSetBuilder::new();
        for value in iter.into_iter().sorted_unstable().dedup() {
            builder.push(value);
        }
        builder.build()
    }
}

impl FromIterator<Range<u64>> for RangeSet {
    fn from_iter<I: IntoIterator<Item = Range<u64>>>(iter: I) -> Self {
        let mut builder = RangeSetBuilder::new();
        builder.extend_ranges(
            iter.into_iter()
                .filter(|r| r.start < r.end)
                .sorted_unstable_by_key(|r| r.start),
        );
        builder.build()
    }
}

impl Extend<u64> for RangeSet {
    fn extend<I: IntoIterator<Item = u64>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl Extend<Range<u64>> for RangeSet {
    fn extend<I: IntoIterator<Item = Range<u64>>>(&mut self, iter: I) {
        for range in iter {
            self.insert_range(range);
        }
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = u64;
    type IntoIter = Integers<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

macro_rules! set_operator {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $impl_fn:ident) => {
        impl std::ops::$op<&RangeSet> for &RangeSet {
            type Output = RangeSet;

            fn $method(self, rhs: &RangeSet) -> RangeSet {
                self.$impl_fn(rhs)
            }
        }

        impl std::ops::$assign_op<&RangeSet> for RangeSet {
            fn $assign_method(&mut self, rhs: &RangeSet) {
                *self = self.$impl_fn(rhs);
            }
        }
    };
}

set_operator!(BitOr, bitor, BitOrAssign, bitor_assign, union);
set_operator!(BitAnd, bitand, BitAndAssign, bitand_assign, intersection);
set_operator!(BitXor, bitxor, BitXorAssign, bitxor_assign, symmetric_difference);
set_operator!(Sub, sub, SubAssign, sub_assign, subtracting);
