//! A read-only, clipped view over the ranges of a [`RangeSet`](crate::RangeSet).

use std::ops::Range;

use crate::{iter::Integers, range_set::half_open_saturating};

/// An immutable, non-owning view over a sorted, coalesced list of half-open ranges.
///
/// `RangeView<'a>` borrows the physical ranges of a `RangeSet` and applies a
/// clip window on top: every logical range is the intersection of a physical
/// range with `clip`. Only the first and last logical ranges can actually be
/// shortened by the clip, since the view always covers exactly the physical
/// ranges that intersect the window.
///
/// Key characteristics:
/// - Borrowed: cloning and clamping never copy the underlying ranges.
/// - Restartable: [`iter`](Self::iter) can be called any number of times and
///   iterates in both directions.
/// - Half-open semantics: each range is `[start, end)`.
///
/// Complexity overview:
/// - `search_position` / `contains_position` / `clamp` / `split_at_position`: O(log n)
/// - `get`, `first`, `last`: O(1)
/// - Iteration: O(n)
#[derive(Clone)]
pub struct RangeView<'a> {
    /// Physical ranges that intersect `clip`. Sorted, disjoint, non-touching.
    inner: &'a [Range<u64>],

    /// Window applied to every physical range.
    ///
    /// When `inner` is non-empty: `clip.start < inner[0].end` and
    /// `clip.end > inner[last].start`, so no logical range is empty.
    clip: Range<u64>,
}

impl<'a> RangeView<'a> {
    /// An empty view, not tied to any set.
    ///
    /// This is what [`clamp`](Self::clamp) returns when the bounds miss every
    /// range, and what `Default` yields; callers can use it as a placeholder
    /// or to compare a view against "no ranges".
    pub fn empty() -> Self {
        RangeView {
            inner: &[],
            clip: 0..0,
        }
    }

    /// A view covering all of `inner`, which must already be sorted and coalesced.
    pub(crate) fn new(inner: &'a [Range<u64>]) -> Self {
        RangeView {
            inner,
            clip: 0..u64::MAX,
        }
    }

    /// Number of logical ranges.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Logical range at `index`, with the clip applied.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Range<u64>> {
        self.inner.get(index).map(|range| self.clip_range(range))
    }

    pub fn first(&self) -> Option<Range<u64>> {
        self.get(0)
    }

    pub fn last(&self) -> Option<Range<u64>> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Tight logical bounds of the entire view, or `None` when empty.
    pub fn bounds(&self) -> Option<Range<u64>> {
        Some(self.first()?.start..self.last()?.end)
    }

    /// Total number of integers covered by the logical ranges.
    pub fn count_positions(&self) -> u64 {
        self.iter().map(|range| range.end - range.start).sum()
    }

    /// Binary search for the logical range containing `pos`.
    ///
    /// Returns `Ok(index)` when `pos` is inside the logical range at `index`,
    /// otherwise `Err(index)` where `index` is the position a range containing
    /// `pos` would be inserted at.
    pub fn search_position(&self, pos: u64) -> Result<usize, usize> {
        if self.is_empty() || pos < self.clip.start {
            return Err(0);
        }
        if pos >= self.clip.end {
            return Err(self.len());
        }
        let idx = self.inner.partition_point(|range| range.end <= pos);
        match self.inner.get(idx) {
            Some(range) if range.start <= pos => Ok(idx),
            _ => Err(idx),
        }
    }

    pub fn contains_position(&self, pos: u64) -> bool {
        self.search_position(pos).is_ok()
    }

    /// Returns a view restricted to `bounds`, with the ranges at both edges
    /// clipped.
    ///
    /// An empty `bounds`, or one that misses every range, yields an empty view.
    pub fn clamp<R>(&self, bounds: R) -> Self
    where
        R: std::ops::RangeBounds<u64>,
    {
        let bounds = half_open_saturating(bounds);
        let clip = self.clip.start.max(bounds.start)..self.clip.end.min(bounds.end);
        if self.is_empty() || clip.start >= clip.end {
            return Self::empty();
        }

        let lo = self.inner.partition_point(|range| range.end <= clip.start);
        let hi = self.inner.partition_point(|range| range.start < clip.end);
        if lo >= hi {
            return Self::empty();
        }
        RangeView {
            inner: &self.inner[lo..hi],
            clip,
        }
    }

    /// Splits the view at `pos`: the left part holds everything strictly
    /// below `pos`, the right part everything at or above it.
    pub fn split_at_position(&self, pos: u64) -> (Self, Self) {
        (self.clamp(..pos), self.clamp(pos..))
    }

    /// Iterates the logical ranges.
    pub fn iter(&self) -> RangeViewIter<'a> {
        RangeViewIter {
            inner: self.inner.iter(),
            clip: self.clip.clone(),
        }
    }

    /// Iterates every integer covered by this view.
    pub fn integers(&self) -> Integers<'a> {
        Integers::new(self.iter())
    }

    #[inline]
    fn clip_range(&self, range: &Range<u64>) -> Range<u64> {
        clip(range, &self.clip)
    }
}

#[inline]
fn clip(range: &Range<u64>, clip: &Range<u64>) -> Range<u64> {
    let clipped = range.start.max(clip.start)..range.end.min(clip.end);
    debug_assert!(clipped.start < clipped.end);
    clipped
}

impl Default for RangeView<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for RangeView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for RangeView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for RangeView<'_> {}

/// Iterator over the logical ranges of a [`RangeView`].
#[derive(Clone)]
pub struct RangeViewIter<'a> {
    inner: std::slice::Iter<'a, Range<u64>>,
    clip: Range<u64>,
}

impl Iterator for RangeViewIter<'_> {
    type Item = Range<u64>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|range| clip(range, &self.clip))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for RangeViewIter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|range| clip(range, &self.clip))
    }
}

impl ExactSizeIterator for RangeViewIter<'_> {}

impl std::iter::FusedIterator for RangeViewIter<'_> {}

impl<'a> IntoIterator for RangeView<'a> {
    type Item = Range<u64>;
    type IntoIter = RangeViewIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &RangeView<'a> {
    type Item = Range<u64>;
    type IntoIter = RangeViewIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
