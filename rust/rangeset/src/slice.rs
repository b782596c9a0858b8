//! Index-based sub-views of a [`RangeSet`].

use std::ops::Range;

use crate::{
    index::RangeIndex, iter::Integers, range_set::RangeSet, range_view::RangeView,
};

/// A borrowed, read-only run of consecutive members of a [`RangeSet`],
/// selected by a range of [`RangeIndex`] values.
///
/// Produced by [`RangeSet::slice`]. The slice shares the parent's storage;
/// [`to_range_set`](Self::to_range_set) copies it out.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RangeSetSlice<'a> {
    view: RangeView<'a>,
}

impl<'a> RangeSetSlice<'a> {
    /// Number of members in the slice.
    pub fn count(&self) -> u64 {
        self.view.count_positions()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    pub fn first(&self) -> Option<u64> {
        self.view.first().map(|r| r.start)
    }

    pub fn last(&self) -> Option<u64> {
        self.view.last().map(|r| r.end - 1)
    }

    pub fn contains(&self, value: u64) -> bool {
        self.view.contains_position(value)
    }

    /// Iterates the members of the slice; `.rev()` iterates descending.
    pub fn iter(&self) -> Integers<'a> {
        self.view.integers()
    }

    /// The ranges covered by the slice, clipped at both ends.
    pub fn ranges(&self) -> RangeView<'a> {
        self.view.clone()
    }

    pub fn to_range_set(&self) -> RangeSet {
        RangeSet::from_parts(self.view.iter().collect())
    }
}

impl std::fmt::Debug for RangeSetSlice<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.view.iter()).finish()
    }
}

impl<'a> IntoIterator for &RangeSetSlice<'a> {
    type Item = u64;
    type IntoIter = Integers<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl RangeSet {
    /// The members addressed by `indices`.
    ///
    /// # Panics
    ///
    /// Panics if either index is not valid for this set, or if
    /// `indices.start > indices.end`.
    pub fn slice(&self, indices: Range<RangeIndex>) -> RangeSetSlice<'_> {
        assert!(
            indices.start <= indices.end,
            "reversed index range {indices:?}"
        );
        let end_index = self.end_index();
        if indices.start == end_index {
            return RangeSetSlice::default();
        }
        let lo = self.value_at(indices.start);
        let hi = if indices.end == end_index {
            u64::MAX
        } else {
            self.value_at(indices.end)
        };
        RangeSetSlice {
            view: self.range_view_of(lo..hi),
        }
    }
}
