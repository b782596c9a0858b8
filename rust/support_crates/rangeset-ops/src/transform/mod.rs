//! Iterator adapters for sequences of `Range<u64>`.
//!
//! - [`ShiftedRanges`](shift::ShiftedRanges): translates every range by a
//!   signed delta, trapping when a bound would leave the `u64` domain.
//!
//! The [`RangeIteratorsExt`] trait is implemented for all iterators over
//! `Range<u64>` and provides the constructors.

use std::ops::Range;

pub mod shift;

/// Extension trait for more idiomatic usage of the range iterator adapters.
pub trait RangeIteratorsExt: Iterator<Item = Range<u64>> + Sized {
    /// Adapts an iterator of `Range<u64>` to yield every range moved by `delta`.
    ///
    /// # Panics
    ///
    /// Panics if a shifted bound would fall below zero or exceed `u64::MAX`.
    /// Use [`shift::checked_shift`] to test a range beforehand.
    fn shift_by(self, delta: i64) -> shift::ShiftedRanges<Self> {
        shift::ShiftedRanges::new(self, delta)
    }
}

impl<I: Iterator<Item = Range<u64>>> RangeIteratorsExt for I {}
