use std::{iter::Peekable, ops::Range};

use crate::is_empty_range;

/// Creates an iterator that yields the set-union of two ordered, non-overlapping
/// streams of `Range<T>`.
///
/// Overlapping or touching ranges (`next.start <= cur.end`), whether they come
/// from the same side or from different sides, are merged into one output range.
/// Empty input ranges are dropped.
///
/// Complexity: O(len(a) + len(b)) comparisons, constant extra memory.
pub fn union_ranges<T, L, R>(a: L, b: R) -> UnionRanges<L::IntoIter, R::IntoIter, T>
where
    T: Ord + Clone,
    L: IntoIterator<Item = Range<T>>,
    R: IntoIterator<Item = Range<T>>,
{
    UnionRanges::new(a.into_iter(), b.into_iter())
}

/// Iterator adapter returned by [`union_ranges`].
pub struct UnionRanges<I, J, T>
where
    I: Iterator<Item = Range<T>>,
    J: Iterator<Item = Range<T>>,
{
    a: Peekable<I>,
    b: Peekable<J>,
    /// Range pulled from the inputs that did not touch the previous output.
    pending: Option<Range<T>>,
}

impl<I, J, T> UnionRanges<I, J, T>
where
    I: Iterator<Item = Range<T>>,
    J: Iterator<Item = Range<T>>,
    T: Ord + Clone,
{
    pub fn new(a: I, b: J) -> Self {
        Self {
            a: a.peekable(),
            b: b.peekable(),
            pending: None,
        }
    }

    /// Pulls the non-empty input range with the lowest start from either side.
    fn next_by_start(&mut self) -> Option<Range<T>> {
        loop {
            let take_a = match (self.a.peek(), self.b.peek()) {
                (None, None) => return None,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (Some(ra), Some(rb)) => ra.start <= rb.start,
            };
            let next = if take_a { self.a.next() } else { self.b.next() };
            match next {
                Some(range) if is_empty_range(&range) => continue,
                other => return other,
            }
        }
    }
}

impl<I, J, T> Iterator for UnionRanges<I, J, T>
where
    I: Iterator<Item = Range<T>>,
    J: Iterator<Item = Range<T>>,
    T: Ord + Clone,
{
    type Item = Range<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut cur = match self.pending.take() {
            Some(range) => range,
            None => self.next_by_start()?,
        };
        while let Some(next) = self.next_by_start() {
            if next.start > cur.end {
                self.pending = Some(next);
                break;
            }
            if next.end > cur.end {
                cur.end = next.end;
            }
        }
        Some(cur)
    }
}
