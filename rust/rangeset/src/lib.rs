//! A sparse, ordered set of non-negative integers.
//!
//! [`RangeSet`] stores its members as a maximally coalesced list of
//! half-open `Range<u64>` values, which keeps large contiguous runs compact and
//! makes membership tests and positional lookups logarithmic in the number of
//! ranges.
//!
//! On top of the set itself the crate provides:
//! - [`RangeIndex`]: an ordered position within a set, used for random access
//!   and slicing;
//! - [`RangeView`]: a borrowed, clipped view over the stored ranges;
//! - [`RangeSetSlice`]: a borrowed run of members selected by indices;
//! - [`RangeSetBuilder`]: O(n) construction from ascending input.

pub mod builder;
pub mod index;
pub mod iter;
pub mod range_set;
pub mod range_view;
pub mod shift;
pub mod slice;
#[cfg(test)]
#[allow(clippy::single_range_in_vec_init)]
mod tests;

pub use builder::RangeSetBuilder;
pub use index::RangeIndex;
pub use iter::Integers;
pub use range_set::RangeSet;
pub use range_view::{RangeView, RangeViewIter};
pub use rangeset_common::{Result, error::Error};
pub use slice::RangeSetSlice;
