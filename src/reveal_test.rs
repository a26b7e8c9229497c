use super::*;

#[test]
fn stagger_grows_per_index() {
    assert_eq!(stagger_delay_ms(0, 100), 0);
    assert_eq!(stagger_delay_ms(1, 100), 100);
    assert_eq!(stagger_delay_ms(7, 100), 700);
}

#[test]
fn transition_delay_is_css_milliseconds() {
    assert_eq!(transition_delay(0, 100), "0ms");
    assert_eq!(transition_delay(3, 100), "300ms");
}

#[test]
fn new_set_starts_hidden() {
    let set = RevealSet::new(3);
    assert_eq!(set.len(), 3);
    assert_eq!(set.revealed_count(), 0);
    assert!(!set.is_complete());
    assert!(!set.is_revealed(0));
}

#[test]
fn first_intersection_reveals_once() {
    let mut set = RevealSet::new(2);
    assert!(set.observe(1, true));
    assert!(set.is_revealed(1));
    assert!(!set.observe(1, true));
}

#[test]
fn non_intersecting_entries_do_nothing() {
    let mut set = RevealSet::new(1);
    assert!(!set.observe(0, false));
    assert!(!set.is_revealed(0));
}

#[test]
fn reveal_is_monotonic() {
    let mut set = RevealSet::new(1);
    set.observe(0, true);
    for intersecting in [false, true, false, false] {
        set.observe(0, intersecting);
        assert!(set.is_revealed(0));
    }
}

#[test]
fn out_of_range_index_is_ignored() {
    let mut set = RevealSet::new(1);
    assert!(!set.observe(5, true));
    assert!(!set.is_revealed(5));
}

#[test]
fn complete_once_everything_revealed() {
    let mut set = RevealSet::new(2);
    set.observe(0, true);
    assert!(!set.is_complete());
    set.observe(1, true);
    assert!(set.is_complete());
    assert_eq!(set.revealed_count(), 2);
}

#[test]
fn empty_set_is_trivially_complete() {
    let set = RevealSet::new(0);
    assert!(set.is_empty());
    assert!(set.is_complete());
}
