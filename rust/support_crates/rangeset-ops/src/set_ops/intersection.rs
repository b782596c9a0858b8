use std::{cmp::Ordering, ops::Range};

/// Creates an iterator that yields the set-intersection of two ordered,
/// non-overlapping streams of `Range<T>`.
///
/// The walk holds one current range from each side. At every step the overlap
/// of the two current ranges (if non-empty) is yielded and whichever range
/// ends first is replaced by the next one from its side.
///
/// Complexity: O(len(a) + len(b)) comparisons, constant extra memory.
pub fn intersect_ranges<T, L, R>(a: L, b: R) -> IntersectionRanges<L::IntoIter, R::IntoIter, T>
where
    T: Ord + Clone,
    L: IntoIterator<Item = Range<T>>,
    R: IntoIterator<Item = Range<T>>,
{
    IntersectionRanges::new(a.into_iter(), b.into_iter())
}

/// Iterator adapter returned by [`intersect_ranges`].
pub struct IntersectionRanges<I, J, T>
where
    I: Iterator<Item = Range<T>>,
    J: Iterator<Item = Range<T>>,
{
    a: I,
    b: J,
    cur_a: Option<Range<T>>,
    cur_b: Option<Range<T>>,
}

impl<I, J, T> IntersectionRanges<I, J, T>
where
    I: Iterator<Item = Range<T>>,
    J: Iterator<Item = Range<T>>,
    T: Ord + Clone,
{
    pub fn new(mut a: I, mut b: J) -> Self {
        let cur_a = a.next();
        let cur_b = b.next();
        Self { a, b, cur_a, cur_b }
    }
}

impl<I, J, T> Iterator for IntersectionRanges<I, J, T>
where
    I: Iterator<Item = Range<T>>,
    J: Iterator<Item = Range<T>>,
    T: Ord + Clone,
{
    type Item = Range<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let ra = self.cur_a.as_ref()?;
            let rb = self.cur_b.as_ref()?;

            let start = std::cmp::max(&ra.start, &rb.start).clone();
            let end = std::cmp::min(&ra.end, &rb.end).clone();

            match ra.end.cmp(&rb.end) {
                Ordering::Less => self.cur_a = self.a.next(),
                Ordering::Greater => self.cur_b = self.b.next(),
                Ordering::Equal => {
                    self.cur_a = self.a.next();
                    self.cur_b = self.b.next();
                }
            }

            // Disjoint pairs produce start >= end and are skipped.
            if start < end {
                return Some(start..end);
            }
        }
    }
}
