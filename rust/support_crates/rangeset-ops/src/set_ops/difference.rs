use std::{iter::Peekable, ops::Range};

use itertools::{PutBack, put_back};

use crate::is_empty_range;

/// Creates an iterator that yields the ranges of `a` with every position
/// covered by `b` removed (`a \ b`).
///
/// When a range of `b` falls strictly inside a range of `a`, the `a` range is
/// split: the left remainder is yielded and the right remainder is pushed back
/// onto `a` to be cut again by the following `b` ranges.
///
/// Complexity: O(len(a) + len(b)) comparisons, constant extra memory.
pub fn difference_ranges<T, L, R>(a: L, b: R) -> DifferenceRanges<L::IntoIter, R::IntoIter, T>
where
    T: Ord + Clone,
    L: IntoIterator<Item = Range<T>>,
    R: IntoIterator<Item = Range<T>>,
{
    DifferenceRanges::new(a.into_iter(), b.into_iter())
}

/// Iterator adapter returned by [`difference_ranges`].
pub struct DifferenceRanges<I, J, T>
where
    I: Iterator<Item = Range<T>>,
    J: Iterator<Item = Range<T>>,
{
    a: PutBack<I>,
    b: Peekable<J>,
}

impl<I, J, T> DifferenceRanges<I, J, T>
where
    I: Iterator<Item = Range<T>>,
    J: Iterator<Item = Range<T>>,
    T: Ord + Clone,
{
    pub fn new(a: I, b: J) -> Self {
        Self {
            a: put_back(a),
            b: b.peekable(),
        }
    }
}

impl<I, J, T> Iterator for DifferenceRanges<I, J, T>
where
    I: Iterator<Item = Range<T>>,
    J: Iterator<Item = Range<T>>,
    T: Ord + Clone,
{
    type Item = Range<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let cur = self.a.next()?;
            if is_empty_range(&cur) {
                continue;
            }

            // Skip subtrahends entirely before `cur`.
            while let Some(rb) = self.b.peek() {
                if rb.end <= cur.start || is_empty_range(rb) {
                    self.b.next();
                } else {
                    break;
                }
            }

            let cut = match self.b.peek() {
                Some(rb) if rb.start < cur.end => rb.clone(),
                _ => return Some(cur),
            };

            if cut.end < cur.end {
                self.a.put_back(cut.end.clone()..cur.end.clone());
            }
            if cur.start < cut.start {
                return Some(cur.start..cut.start);
            }
        }
    }
}
