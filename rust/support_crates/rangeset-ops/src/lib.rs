//! Streaming operations over sorted sequences of half-open ranges.
//!
//! Every function in this crate consumes one or two iterators of `Range<T>`
//! that are sorted by `start` and non-overlapping, and produces another such
//! iterator without materializing intermediate collections.
//!
//! - [`set_ops`]: union, intersection, difference and symmetric difference,
//!   each a single linear merge-walk over both inputs.
//! - [`transform`]: per-range adapters such as translating every range by a
//!   signed delta.

pub mod set_ops;
pub mod transform;

pub use set_ops::{difference_ranges, intersect_ranges, symmetric_difference_ranges, union_ranges};
pub use transform::RangeIteratorsExt;

/// Returns `true` if the half-open range contains no values.
#[inline]
pub(crate) fn is_empty_range<T: PartialOrd>(range: &std::ops::Range<T>) -> bool {
    range.start >= range.end
}
