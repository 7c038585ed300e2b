//! Snapshot equality tests

use custom_defines::store::DefineSetStore;
use custom_defines::{DefineEntry, DefineSet};

use crate::common::{set, temp_store};

#[test]
fn test_snapshot_equals_current() {
    let (_dir, store) = temp_store(&[("A", true), ("B", false), ("A", true)]);
    let snapshot = store.snapshot();
    assert!(DefineSetStore::equals_snapshot(store.current(), &snapshot));
}

#[test]
fn test_mutating_snapshot_does_not_touch_store() {
    let (_dir, store) = temp_store(&[("A", true)]);

    let mut snapshot = store.snapshot();
    snapshot.push(DefineEntry::new("B"));

    assert_eq!(store.current().entries(), &[DefineEntry::new("A")]);
    assert!(!DefineSetStore::equals_snapshot(store.current(), &snapshot));
}

#[test]
fn test_order_does_not_matter() {
    let a = set(&[("A", true), ("B", false), ("C", true)]);
    let b = set(&[("C", true), ("A", true), ("B", false)]);
    assert!(DefineSetStore::equals_snapshot(&a, &b));
}

#[test]
fn test_name_and_flag_both_compared() {
    let base = set(&[("A", true)]);
    assert!(!DefineSetStore::equals_snapshot(&base, &set(&[("A", false)])));
    assert!(!DefineSetStore::equals_snapshot(&base, &set(&[("a", true)])));
    assert!(!DefineSetStore::equals_snapshot(&base, &DefineSet::new()));
    assert!(!DefineSetStore::equals_snapshot(&DefineSet::new(), &base));
}

#[test]
fn test_duplicates_collapse_under_snapshot_equality() {
    // Presence equality: the extra copy of X goes unnoticed
    let a = set(&[("X", true), ("X", true)]);
    let b = set(&[("X", true)]);

    assert!(DefineSetStore::equals_snapshot(&a, &b));
    assert!(DefineSetStore::equals_snapshot(&b, &a));
    assert!(!a.equals_counted(&b));
}
