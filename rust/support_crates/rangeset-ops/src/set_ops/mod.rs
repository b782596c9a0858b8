//! Set algebra over ordered, non-overlapping range streams.
//!
//! All adapters share the same input contract: each side yields ranges in
//! ascending `start` order that do not overlap each other (adjacent ranges
//! are allowed, empty ranges are ignored). All outputs are sorted, free of
//! empty ranges, and maximally coalesced: no two yielded ranges touch.

pub mod difference;
pub mod intersection;
pub mod symmetric_difference;
pub mod union;

pub use difference::{DifferenceRanges, difference_ranges};
pub use intersection::{IntersectionRanges, intersect_ranges};
pub use symmetric_difference::{SymmetricDifferenceRanges, symmetric_difference_ranges};
pub use union::{UnionRanges, union_ranges};
