use std::ops::Range;

use crate::RangeSet;

mod mutation_tests;
mod range_view_tests;

pub(crate) fn set_of(ranges: &[Range<u64>]) -> RangeSet {
    ranges.iter().cloned().collect()
}

/// The five-range set used across the view and slicing tests.
pub(crate) fn sample_set() -> RangeSet {
    set_of(&[2..5, 8..11, 15..20, 30..40, 60..80])
}
