//! An iterator adapter that moves all ranges by a signed amount.

use std::ops::Range;

/// Moves `range` by `delta`, or returns `None` if either bound would leave
/// the `u64` domain.
#[inline]
pub fn checked_shift(range: &Range<u64>, delta: i64) -> Option<Range<u64>> {
    let start = range.start.checked_add_signed(delta)?;
    let end = range.end.checked_add_signed(delta)?;
    Some(start..end)
}

/// An iterator adapter that moves every range by a fixed signed amount.
///
/// Order and disjointness of the input are preserved, since every range moves
/// by the same amount.
#[derive(Debug, Clone)]
pub struct ShiftedRanges<I>
where
    I: Iterator<Item = Range<u64>>,
{
    inner: I,
    delta: i64,
}

impl<I> ShiftedRanges<I>
where
    I: Iterator<Item = Range<u64>>,
{
    pub fn new(inner: I, delta: i64) -> Self {
        ShiftedRanges { inner, delta }
    }
}

impl<I> Iterator for ShiftedRanges<I>
where
    I: Iterator<Item = Range<u64>>,
{
    type Item = Range<u64>;

    /// Panics if `delta` would move either bound out of the `u64` domain.
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|range| {
            checked_shift(&range, self.delta).unwrap_or_else(|| {
                panic!(
                    "cannot shift range {}..{} by {}: result leaves the integer domain",
                    range.start, range.end, self.delta
                )
            })
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I> ExactSizeIterator for ShiftedRanges<I> where I: ExactSizeIterator<Item = Range<u64>> {}

impl<I> DoubleEndedIterator for ShiftedRanges<I>
where
    I: DoubleEndedIterator<Item = Range<u64>>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|range| {
            checked_shift(&range, self.delta).unwrap_or_else(|| {
                panic!(
                    "cannot shift range {}..{} by {}: result leaves the integer domain",
                    range.start, range.end, self.delta
                )
            })
        })
    }
}
