use super::set_of;
use crate::RangeSet;

#[test]
fn test_insert_range_into_empty() {
    let mut set = RangeSet::new();
    set.insert_range(4..11);
    assert_eq!(set.count(), 7);
    assert_eq!(set.first(), Some(4));
    assert_eq!(set.last(), Some(10));
    set.check_full_invariants();
}

#[test]
fn test_insert_merges_adjacent_range() {
    let mut set = RangeSet::new();
    set.insert(1);
    set.insert(2);
    set.insert_range(100..200);
    set.insert_range(1000..2000);
    assert_eq!(set.as_ranges(), &[1..3, 100..200, 1000..2000]);

    assert!(set.insert(200));
    assert_eq!(set.as_ranges(), &[1..3, 100..201, 1000..2000]);
    assert_eq!(set.count(), 2 + 101 + 1000);
    set.check_full_invariants();

    assert!(set.insert(99));
    assert_eq!(set.as_ranges(), &[1..3, 99..201, 1000..2000]);
    set.check_full_invariants();
}

#[test]
fn test_insert_bridges_gap() {
    let mut set = set_of(&[1..3, 5..7]);
    assert!(set.insert(3));
    assert_eq!(set.as_ranges(), &[1..4, 5..7]);
    assert!(set.insert(4));
    assert_eq!(set.as_ranges(), &[1..7]);
    assert_eq!(set.count(), 6);
    set.check_full_invariants();

    let mut set = set_of(&[1..3, 5..7, 9..10, 20..30]);
    set.insert_range(2..9);
    assert_eq!(set.as_ranges(), &[1..10, 20..30]);
    assert_eq!(set.count(), 19);
    set.check_full_invariants();

    set.insert_range(0..100);
    assert_eq!(set.as_ranges(), &[0..100]);
    assert_eq!(set.count(), 100);
}

#[test]
fn test_insert_between_ranges() {
    let mut set = set_of(&[1..3, 20..30]);
    set.insert_range(10..12);
    assert_eq!(set.as_ranges(), &[1..3, 10..12, 20..30]);
    set.insert_range(40..=41);
    assert_eq!(set.as_ranges(), &[1..3, 10..12, 20..30, 40..42]);
    set.insert(0);
    assert_eq!(set.as_ranges(), &[0..3, 10..12, 20..30, 40..42]);
    assert_eq!(set.count(), 3 + 2 + 10 + 2);
    set.check_full_invariants();
}

#[test]
fn test_insert_is_idempotent() {
    let mut set = set_of(&[10..20, 30..40]);
    let before = set.clone();
    assert!(!set.insert(15));
    set.insert_range(12..18);
    set.insert_range(30..40);
    set.insert_range(25..25);
    assert_eq!(set, before);
    assert_eq!(set.count(), 20);
}

#[test]
fn test_insert_near_domain_end() {
    let mut set = RangeSet::new();
    assert!(set.insert(u64::MAX - 1));
    set.insert_range(u64::MAX - 5..u64::MAX - 2);
    assert_eq!(set.as_ranges(), &[u64::MAX - 5..u64::MAX - 2, u64::MAX - 1..u64::MAX]);
    set.insert(u64::MAX - 2);
    assert_eq!(set.as_ranges(), &[u64::MAX - 5..u64::MAX]);
    assert_eq!(set.last(), Some(u64::MAX - 1));

    set.remove_range(u64::MAX - 1..);
    assert_eq!(set.last(), Some(u64::MAX - 2));
    set.check_full_invariants();
}

#[test]
#[should_panic(expected = "cannot be stored")]
fn test_insert_max_panics() {
    let mut set = RangeSet::new();
    set.insert(u64::MAX);
}

#[test]
fn test_remove_splits_range() {
    let mut set = RangeSet::from_range(100..200);
    set.remove_range(150..160);
    assert_eq!(set.as_ranges(), &[100..150, 160..200]);
    assert_eq!(set.count(), 90);
    set.check_full_invariants();

    assert!(set.remove(170));
    assert_eq!(set.as_ranges(), &[100..150, 160..170, 171..200]);
    assert!(!set.remove(170));
    set.check_full_invariants();
}

#[test]
fn test_remove_trims_edges() {
    let mut set = set_of(&[10..20, 30..40, 50..60]);
    set.remove_range(15..35);
    assert_eq!(set.as_ranges(), &[10..15, 35..40, 50..60]);
    assert_eq!(set.count(), 20);

    set.remove_range(0..=10);
    assert_eq!(set.as_ranges(), &[11..15, 35..40, 50..60]);

    set.remove_range(39..51);
    assert_eq!(set.as_ranges(), &[11..15, 35..39, 51..60]);
    assert_eq!(set.count(), 4 + 4 + 9);
    set.check_full_invariants();

    set.remove_range(..);
    assert!(set.is_empty());
    assert_eq!(set.count(), 0);
}

#[test]
fn test_remove_whole_ranges() {
    let mut set = set_of(&[10..20, 30..40, 50..60]);
    set.remove_range(30..40);
    assert_eq!(set.as_ranges(), &[10..20, 50..60]);
    set.remove_range(5..65);
    assert!(set.is_empty());
    set.check_full_invariants();
}

#[test]
fn test_remove_absent_is_noop() {
    let mut set = set_of(&[10..20, 30..40]);
    let before = set.clone();
    set.remove_range(20..30);
    set.remove_range(0..10);
    set.remove_range(40..);
    set.remove_range(15..15);
    assert!(!set.remove(25));
    assert_eq!(set, before);
    assert_eq!(set.as_ranges().as_ptr(), before.as_ranges().as_ptr());

    let mut empty = RangeSet::new();
    empty.remove_range(..);
    assert!(!empty.remove(0));
    assert!(empty.is_empty());
}

#[test]
fn test_remove_all() {
    let mut set = set_of(&[10..20, 30..40]);
    let shared = set.clone();
    set.remove_all();
    assert!(set.is_empty());
    assert_eq!(set.count(), 0);
    assert_eq!(shared.count(), 20);
    set.check_full_invariants();
}
