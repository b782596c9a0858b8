//! Iteration over the individual integers of a range list.

use std::iter::{Flatten, FusedIterator};

use crate::range_view::RangeViewIter;

/// Iterator over the integers covered by a [`RangeView`](crate::RangeView),
/// in ascending order, or descending via [`rev`](Iterator::rev).
///
/// Obtained from [`RangeSet::iter`](crate::RangeSet::iter),
/// [`RangeSet::iter_in`](crate::RangeSet::iter_in) and
/// [`RangeSetSlice::iter`](crate::RangeSetSlice::iter).
#[derive(Clone)]
pub struct Integers<'a>(Flatten<RangeViewIter<'a>>);

impl<'a> Integers<'a> {
    #[inline]
    pub(crate) fn new(ranges: RangeViewIter<'a>) -> Self {
        Integers(ranges.flatten())
    }
}

impl Iterator for Integers<'_> {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl DoubleEndedIterator for Integers<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl FusedIterator for Integers<'_> {}
