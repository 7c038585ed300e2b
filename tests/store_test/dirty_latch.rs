//! Unapplied-changes latch tests

use custom_defines::ChangeDetection;
use custom_defines::store::DefineSetStore;

use crate::common::{data_path, temp_store};

#[test]
fn test_fresh_store_is_clean() {
    let (_dir, mut store) = temp_store(&[("A", true)]);
    assert!(!store.is_dirty());
    assert!(!store.detect_change());
    assert!(!store.is_dirty());
}

#[test]
fn test_add_entry_marks_dirty() {
    let (_dir, mut store) = temp_store(&[]);

    store.add_entry().unwrap();
    assert!(store.detect_change());

    assert!(store.is_dirty());
    let added = store.current().get(0).unwrap();
    assert_eq!(added.name, "");
    assert!(!added.enabled);
}

#[test]
fn test_latch_is_not_cleared_by_reverting() {
    let (_dir, mut store) = temp_store(&[("A", true)]);

    store.rename_entry(0, "B").unwrap();
    store.detect_change();
    store.rename_entry(0, "A").unwrap();
    store.detect_change();

    assert!(store.is_dirty());
}

#[test]
fn test_edit_and_revert_within_one_cycle_is_not_a_change() {
    let (_dir, mut store) = temp_store(&[("A", true)]);

    store.toggle_entry(0).unwrap();
    store.toggle_entry(0).unwrap();

    assert!(!store.detect_change());
    assert!(!store.is_dirty());
}

#[test]
fn test_apply_clears_latch() {
    let (_dir, mut store) = temp_store(&[("A", true)]);
    store.toggle_entry(0).unwrap();
    store.detect_change();

    store.apply(|_| Ok(())).unwrap();

    assert!(!store.is_dirty());
    assert!(!store.detect_change());
    assert!(!store.is_dirty());
}

#[test]
fn test_apply_picks_up_edits_made_since_last_cycle() {
    let (_dir, mut store) = temp_store(&[("A", false)]);
    store.toggle_entry(0).unwrap();

    let mut seen = Vec::new();
    store
        .apply(|names| {
            seen = names.to_vec();
            Ok(())
        })
        .unwrap();

    assert_eq!(seen, vec!["A"]);
    assert!(!store.is_dirty());
}

#[test]
fn test_apply_when_clean_still_runs() {
    let (_dir, mut store) = temp_store(&[("A", true), ("B", false), ("C", true)]);
    let mut calls = 0;

    store
        .apply(|names| {
            calls += 1;
            assert_eq!(names, ["A".to_string(), "C".to_string()]);
            Ok(())
        })
        .unwrap();

    assert_eq!(calls, 1);
    assert!(!store.is_dirty());
}

#[test]
fn test_reloaded_store_starts_clean() {
    let (dir, mut store) = temp_store(&[]);
    store.add_entry().unwrap();
    store.detect_change();
    assert!(store.is_dirty());

    let reloaded = DefineSetStore::load(data_path(&dir)).unwrap();
    assert!(!reloaded.is_dirty());
}

#[test]
fn test_counted_detection_catches_duplicate() {
    let (_dir, store) = temp_store(&[("X", true)]);
    let mut store = store.with_detection(ChangeDetection::Counted);

    store.add_entry().unwrap();
    store.rename_entry(1, "X").unwrap();
    store.toggle_entry(1).unwrap();

    assert!(store.detect_change());
    assert!(store.is_dirty());
}
