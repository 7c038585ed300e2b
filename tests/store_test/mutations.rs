//! Positional edit tests

use custom_defines::DefineEntry;
use custom_defines::store::StoreError;

use crate::common::{set, temp_store};

#[test]
fn test_enabled_names_keep_list_order() {
    let (_dir, store) = temp_store(&[("A", true), ("B", false), ("C", true)]);
    assert_eq!(store.compute_enabled_names(), vec!["A", "C"]);
}

#[test]
fn test_add_returns_new_index() {
    let (_dir, mut store) = temp_store(&[("A", true), ("B", true)]);
    assert_eq!(store.add_entry().unwrap(), 2);
    assert_eq!(store.current().get(2), Some(&DefineEntry::placeholder()));
}

#[test]
fn test_remove_returns_entry_and_shifts() {
    let (_dir, mut store) = temp_store(&[("A", true), ("B", false), ("C", true)]);

    let removed = store.remove_entry(1).unwrap();

    assert_eq!(removed, DefineEntry::with_enabled("B", false));
    assert_eq!(store.current().entries(), set(&[("A", true), ("C", true)]).entries());
}

#[test]
fn test_duplicate_names_apply_independently() {
    let (_dir, mut store) = temp_store(&[("A", true), ("A", true)]);

    assert!(!store.toggle_entry(1).unwrap());

    assert_eq!(store.compute_enabled_names(), vec!["A"]);
    assert_eq!(store.current().entries(), set(&[("A", true), ("A", false)]).entries());
}

#[test]
fn test_remove_out_of_range() {
    let (_dir, mut store) = temp_store(&[("A", true)]);
    let before = store.snapshot();

    let err = store.remove_entry(1).unwrap_err();

    assert!(matches!(err, StoreError::Index { index: 1, len: 1 }), "got {err:?}");
    assert_eq!(store.current().entries(), before.entries());
    assert!(!store.detect_change());
    assert!(!store.is_dirty());
}

#[test]
fn test_rename_and_toggle_out_of_range_on_empty_list() {
    let (_dir, mut store) = temp_store(&[]);

    assert!(matches!(
        store.rename_entry(0, "A"),
        Err(StoreError::Index { index: 0, len: 0 })
    ));
    assert!(matches!(
        store.toggle_entry(0),
        Err(StoreError::Index { index: 0, len: 0 })
    ));
    assert!(store.current().is_empty());
}

#[test]
fn test_out_of_range_keeps_existing_latch() {
    let (_dir, mut store) = temp_store(&[("A", true)]);
    store.toggle_entry(0).unwrap();
    store.detect_change();

    assert!(store.remove_entry(9).is_err());

    assert!(store.is_dirty());
    assert_eq!(store.current().len(), 1);
}
