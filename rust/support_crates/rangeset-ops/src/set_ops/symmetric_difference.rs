use std::{cmp::Ordering, ops::Range};

use itertools::{PutBack, put_back};

use crate::is_empty_range;

type NonEmpty<I, T> = std::iter::Filter<I, fn(&Range<T>) -> bool>;

fn non_empty<T: PartialOrd>(range: &Range<T>) -> bool {
    !is_empty_range(range)
}

/// Creates an iterator that yields the positions covered by exactly one of
/// `a` and `b`.
///
/// For every overlapping pair of ranges the walk yields the non-overlapping
/// head and pushes the non-overlapping tail back onto the side that extends
/// further, so each input range is visited once. Pieces that end up touching
/// (for example `0..5` from `a` followed by `5..10` from `b`) are merged before
/// being yielded.
///
/// Complexity: O(len(a) + len(b)) comparisons, constant extra memory.
pub fn symmetric_difference_ranges<T, L, R>(
    a: L,
    b: R,
) -> SymmetricDifferenceRanges<L::IntoIter, R::IntoIter, T>
where
    T: Ord + Clone,
    L: IntoIterator<Item = Range<T>>,
    R: IntoIterator<Item = Range<T>>,
{
    SymmetricDifferenceRanges::new(a.into_iter(), b.into_iter())
}

/// Iterator adapter returned by [`symmetric_difference_ranges`].
pub struct SymmetricDifferenceRanges<I, J, T>
where
    I: Iterator<Item = Range<T>>,
    J: Iterator<Item = Range<T>>,
{
    a: PutBack<NonEmpty<I, T>>,
    b: PutBack<NonEmpty<J, T>>,
    pending: Option<Range<T>>,
}

impl<I, J, T> SymmetricDifferenceRanges<I, J, T>
where
    I: Iterator<Item = Range<T>>,
    J: Iterator<Item = Range<T>>,
    T: Ord + Clone,
{
    pub fn new(a: I, b: J) -> Self {
        Self {
            a: put_back(a.filter(non_empty as fn(&Range<T>) -> bool)),
            b: put_back(b.filter(non_empty as fn(&Range<T>) -> bool)),
            pending: None,
        }
    }

    /// Yields the next exclusive piece, not yet merged with its neighbours.
    fn next_piece(&mut self) -> Option<Range<T>> {
        loop {
            let (ra, rb) = match (self.a.next(), self.b.next()) {
                (None, None) => return None,
                (Some(ra), None) => return Some(ra),
                (None, Some(rb)) => return Some(rb),
                (Some(ra), Some(rb)) => (ra, rb),
            };

            if ra.end <= rb.start {
                self.b.put_back(rb);
                return Some(ra);
            }
            if rb.end <= ra.start {
                self.a.put_back(ra);
                return Some(rb);
            }

            // Overlap: the tail beyond the shorter range stays in play.
            match ra.end.cmp(&rb.end) {
                Ordering::Less => {
                    self.b.put_back(ra.end.clone()..rb.end.clone());
                }
                Ordering::Greater => {
                    self.a.put_back(rb.end.clone()..ra.end.clone());
                }
                Ordering::Equal => {}
            }

            match ra.start.cmp(&rb.start) {
                Ordering::Less => return Some(ra.start..rb.start),
                Ordering::Greater => return Some(rb.start..ra.start),
                Ordering::Equal => continue,
            }
        }
    }
}

impl<I, J, T> Iterator for SymmetricDifferenceRanges<I, J, T>
where
    I: Iterator<Item = Range<T>>,
    J: Iterator<Item = Range<T>>,
    T: Ord + Clone,
{
    type Item = Range<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut cur = match self.pending.take() {
            Some(range) => range,
            None => self.next_piece()?,
        };
        while let Some(piece) = self.next_piece() {
            if piece.start > cur.end {
                self.pending = Some(piece);
                break;
            }
            cur.end = piece.end;
        }
        Some(cur)
    }
}

#[cfg(test)]
#[allow(clippy::single_range_in_vec_init)]
mod tests {
    use super::symmetric_difference_ranges;
    use std::ops::Range;

    fn collect(a: Vec<Range<u64>>, b: Vec<Range<u64>>) -> Vec<Range<u64>> {
        let forward: Vec<_> = symmetric_difference_ranges(a.clone(), b.clone()).collect();
        let backward: Vec<_> = symmetric_difference_ranges(b, a).collect();
        assert_eq!(forward, backward);
        forward
    }

    #[test]
    fn test_empty_inputs() {
        assert!(collect(vec![], vec![]).is_empty());
        assert_eq!(collect(vec![1..10], vec![]), vec![1..10]);
    }

    #[test]
    fn test_identical_inputs_cancel() {
        assert!(collect(vec![5..18, 45..61], vec![5..18, 45..61]).is_empty());
        assert!(collect(vec![42..43], vec![42..43]).is_empty());
    }

    #[test]
    fn test_partial_overlap() {
        assert_eq!(collect(vec![0..5], vec![3..10]), vec![0..3, 5..10]);
        assert_eq!(collect(vec![1..10], vec![1..11]), vec![10..11]);
    }

    #[test]
    fn test_multi_segment() {
        let a = vec![1..3, 4..11, 15..21, 40..51];
        let b = vec![5..18, 45..61];
        assert_eq!(
            collect(a, b),
            vec![1..3, 4..5, 11..15, 18..21, 40..45, 51..61]
        );
    }

    #[test]
    fn test_interleaved_points_coalesce() {
        let a = vec![1..2, 3..4, 5..6, 7..8];
        let b = vec![0..1, 2..3, 4..5, 6..7];
        assert_eq!(collect(a, b), vec![0..8]);
    }

    #[test]
    fn test_touching_sides_coalesce() {
        assert_eq!(collect(vec![0..5], vec![5..10]), vec![0..10]);
    }

    #[test]
    fn test_hole_in_middle() {
        assert_eq!(collect(vec![0..1, 2..3], vec![0..3]), vec![1..2]);
        assert_eq!(collect(vec![100..200], vec![150..160]), vec![100..150, 160..200]);
    }

    #[test]
    fn test_empty_ranges_ignored() {
        assert_eq!(collect(vec![4..4, 10..12], vec![11..11]), vec![10..12]);
    }

    fn ranges_of_mask(mask: u64) -> Vec<Range<u64>> {
        let mut out: Vec<Range<u64>> = Vec::new();
        for bit in (0..64).filter(|b| mask & (1 << b) != 0) {
            match out.last_mut() {
                Some(last) if last.end == bit => last.end = bit + 1,
                _ => out.push(bit..bit + 1),
            }
        }
        out
    }

    #[test]
    fn test_long_range_against_many_short_ones() {
        let a = vec![0..100];
        let b = vec![1..2, 3..4, 5..6, 50..60, 99..100];
        assert_eq!(
            collect(a, b),
            vec![0..1, 2..3, 4..5, 6..50, 60..99]
        );
    }

    #[test]
    fn test_randomized_against_bitmasks() {
        fastrand::seed(5_081_923);
        for _ in 0..500 {
            let (x, y) = (fastrand::u64(..), fastrand::u64(..));
            assert_eq!(
                collect(ranges_of_mask(x), ranges_of_mask(y)),
                ranges_of_mask(x ^ y),
                "{x:#x} ^ {y:#x}"
            );
        }
    }
}
