use std::ops::Range;

use super::{sample_set, set_of};
use crate::{RangeSet, RangeView};

fn ranges(view: &RangeView) -> Vec<Range<u64>> {
    view.iter().collect()
}

#[test]
fn test_full_view() {
    let set = sample_set();
    let view = set.range_view();
    assert_eq!(view.len(), 5);
    assert_eq!(ranges(&view), set.as_ranges());
    assert_eq!(view.count_positions(), set.count());
    assert_eq!(view.first(), Some(2..5));
    assert_eq!(view.last(), Some(60..80));
    assert_eq!(view.get(2), Some(15..20));
    assert_eq!(view.get(5), None);
    assert_eq!(view.bounds(), Some(2..80));
}

#[test]
fn test_view_of_clips_edges() {
    let set = sample_set();
    assert_eq!(ranges(&set.range_view_of(9..35)), vec![9..11, 15..20, 30..35]);
    assert_eq!(ranges(&set.range_view_of(2..5)), vec![2..5]);
    assert_eq!(
        ranges(&set.range_view_of(4..61)),
        vec![4..5, 8..11, 15..20, 30..40, 60..61]
    );
    assert_eq!(ranges(&set.range_view_of(1..100)), set.as_ranges());
    assert_eq!(ranges(&set.range_view_of(..)), set.as_ranges());
    assert_eq!(ranges(&set.range_view_of(16..=16)), vec![16..17]);
}

#[test]
fn test_view_of_misses() {
    let set = sample_set();
    assert!(set.range_view_of(0..1).is_empty());
    assert!(set.range_view_of(0..2).is_empty());
    assert!(set.range_view_of(40..60).is_empty());
    assert!(set.range_view_of(80..).is_empty());
    assert!(set.range_view_of(10..10).is_empty());
    assert!(RangeSet::new().range_view_of(..).is_empty());
    assert_eq!(set.range_view_of(40..60), RangeView::empty());
}

#[test]
fn test_reverse_iteration() {
    let set = sample_set();
    let view = set.range_view_of(9..35);
    assert_eq!(
        view.iter().rev().collect::<Vec<_>>(),
        vec![30..35, 15..20, 9..11]
    );
    let mut iter = view.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some(9..11));
    assert_eq!(iter.next_back(), Some(30..35));
    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next(), Some(15..20));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_clamp_composes() {
    let set = sample_set();
    let view = set.range_view_of(9..35);
    assert_eq!(view.clamp(0..100), view);
    assert_eq!(ranges(&view.clamp(10..16)), vec![10..11, 15..16]);
    assert_eq!(ranges(&view.clamp(33..)), vec![33..35]);
    assert!(view.clamp(35..40).is_empty());
    assert_eq!(view.clamp(..=9).count_positions(), 1);
}

#[test]
fn test_search_position() {
    let set = sample_set();
    let view = set.range_view();
    assert_eq!(view.search_position(16), Ok(2));
    assert_eq!(view.search_position(12), Err(2));
    assert_eq!(view.search_position(0), Err(0));
    assert_eq!(view.search_position(100), Err(5));

    let view = set.range_view_of(9..35);
    assert_eq!(view.search_position(5), Err(0));
    assert_eq!(view.search_position(8), Err(0));
    assert_eq!(view.search_position(9), Ok(0));
    assert_eq!(view.search_position(33), Ok(2));
    assert_eq!(view.search_position(35), Err(3));
    assert!(view.contains_position(19));
    assert!(!view.contains_position(36));
}

#[test]
fn test_split_at_position() {
    let set = sample_set();
    let (left, right) = set.range_view().split_at_position(16);
    assert_eq!(ranges(&left), vec![2..5, 8..11, 15..16]);
    assert_eq!(ranges(&right), vec![16..20, 30..40, 60..80]);
    assert_eq!(
        left.count_positions() + right.count_positions(),
        set.count()
    );

    let (left, right) = set.range_view().split_at_position(0);
    assert!(left.is_empty());
    assert_eq!(right, set.range_view());
}

#[test]
fn test_filter_ranges() {
    let set = sample_set();
    let long: Vec<_> = set
        .range_view()
        .iter()
        .filter(|r| r.end - r.start > 3)
        .collect();
    assert_eq!(long, vec![15..20, 30..40, 60..80]);

    let mut visited = Vec::new();
    for range in set.range_view_of(30..) {
        visited.push(range);
    }
    assert_eq!(visited, vec![30..40, 60..80]);
}

#[test]
fn test_view_integers_and_debug() {
    let set = set_of(&[1..3, 10..12]);
    let view = set.range_view_of(2..11);
    assert_eq!(view.integers().collect::<Vec<_>>(), vec![2, 10]);
    assert_eq!(format!("{view:?}"), "[2..3, 10..11]");
    assert_eq!(format!("{:?}", RangeView::default()), "[]");
}
