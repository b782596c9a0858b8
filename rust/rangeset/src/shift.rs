//! Moving the upper part of a [`RangeSet`] by a signed amount.

use rangeset_common::{Result, error::Error};
use rangeset_ops::RangeIteratorsExt;

use crate::{builder::RangeSetBuilder, range_set::RangeSet};

impl RangeSet {
    /// Moves every member `>= threshold` by `delta`.
    ///
    /// Members below `threshold` stay where they are. A stored range that
    /// straddles `threshold` is split first and only its upper part moves.
    ///
    /// A positive `delta` opens a gap of `delta` integers at `threshold`. A
    /// negative `delta` moves the upper part down over `threshold + delta ..
    /// threshold`: members in that interval are dropped even when nothing
    /// moves, and ranges that end up touching are merged.
    ///
    /// Returns a `Domain` error, leaving the set unchanged, if a moved member
    /// would fall below zero or above `u64::MAX - 1`.
    pub fn try_shift(&mut self, threshold: u64, delta: i64) -> Result<()> {
        if delta == 0 {
            return Ok(());
        }
        let floor = threshold.saturating_add_signed(delta.min(0));
        let (below, above) = self.range_view().split_at_position(threshold);
        let (Some(first), Some(last)) = (above.first(), above.last()) else {
            self.remove_range(floor..threshold);
            return Ok(());
        };

        if delta < 0 {
            let lowest = first.start as i128 + delta as i128;
            if lowest < 0 {
                log::debug!(
                    "shift of {threshold}.. by {delta} rejected: {first:?} would move below zero"
                );
                return Err(Error::domain(lowest, "shift moves a member below zero"));
            }
        } else {
            let highest = (last.end - 1) as i128 + delta as i128;
            if highest >= u64::MAX as i128 {
                log::debug!(
                    "shift of {threshold}.. by {delta} rejected: {last:?} would pass u64::MAX - 1"
                );
                return Err(Error::domain(
                    highest,
                    "shift moves a member past the largest storable integer",
                ));
            }
        }

        let mut builder = RangeSetBuilder::new();
        builder.extend_ranges(below.clamp(..floor).iter());
        builder.extend_ranges(above.iter().shift_by(delta));
        let shifted = builder.build();

        log::trace!(
            "shifted {} ranges at {threshold}.. by {delta}: {} -> {} integers",
            above.len(),
            self.count(),
            shifted.count()
        );
        *self = shifted;
        Ok(())
    }

    /// Moves every member `>= threshold` by `delta`, as
    /// [`try_shift`](Self::try_shift) does.
    ///
    /// # Panics
    ///
    /// Panics if a moved member would fall below zero or above `u64::MAX - 1`.
    pub fn shift(&mut self, threshold: u64, delta: i64) {
        if let Err(e) = self.try_shift(threshold, delta) {
            panic!("cannot shift {self:?} at {threshold} by {delta}: {e}");
        }
    }
}
