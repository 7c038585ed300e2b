//! Load/persist tests for the defines file

use custom_defines::store::{DefineSetStore, StoreError};
use custom_defines::DefineSet;
use tempfile::TempDir;

use crate::common::{data_path, set, temp_store};

fn round_trip(entries: &[(&str, bool)]) {
    let (dir, store) = temp_store(entries);
    store.persist().unwrap();

    let loaded = DefineSetStore::load(data_path(&dir)).unwrap();

    assert!(
        DefineSetStore::equals_snapshot(store.current(), loaded.current()),
        "round trip changed {entries:?}"
    );
    assert_eq!(loaded.current().entries(), store.current().entries());
}

#[test]
fn test_load_absent_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = DefineSetStore::load(dir.path().join("missing/defines.toml")).unwrap();

    assert!(DefineSetStore::equals_snapshot(store.current(), &DefineSet::new()));
    assert!(store.current().is_empty());
    assert!(!store.is_dirty());
}

#[test]
fn test_round_trip_empty() {
    round_trip(&[]);
}

#[test]
fn test_round_trip_single() {
    round_trip(&[("ENABLE_CHEATS", false)]);
}

#[test]
fn test_round_trip_many_with_duplicates_and_blank_names() {
    round_trip(&[
        ("A", true),
        ("", false),
        ("A", true),
        ("B \"quoted\"", false),
        ("A", true),
    ]);
}

#[test]
fn test_malformed_file_is_load_error() {
    let dir = TempDir::new().unwrap();
    let path = data_path(&dir);
    std::fs::write(&path, "define = \"not a list\"\n").unwrap();

    let err = DefineSetStore::load(&path).err().expect("load should fail");

    assert!(matches!(err, StoreError::Parse { .. }), "got {err:?}");
    assert!(err.to_string().contains("defines.toml"));
}

#[test]
fn test_every_edit_is_on_disk_before_returning() {
    let (dir, mut store) = temp_store(&[]);

    store.add_entry().unwrap();
    store.rename_entry(0, "A").unwrap();
    store.toggle_entry(0).unwrap();
    store.add_entry().unwrap();
    store.remove_entry(1).unwrap();

    let on_disk = DefineSetStore::load(data_path(&dir)).unwrap();
    assert_eq!(on_disk.current().entries(), set(&[("A", true)]).entries());
}

#[test]
fn test_persist_failure_rolls_back_edit() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    let mut store = DefineSetStore::with_defines(blocker.join("defines.toml"), set(&[("A", true)]));
    let err = store.toggle_entry(0).unwrap_err();

    assert!(matches!(err, StoreError::Persist { .. }), "got {err:?}");
    assert_eq!(store.current().entries(), set(&[("A", true)]).entries());
    assert!(!store.detect_change());
    assert!(!store.is_dirty());
}

#[test]
fn test_persist_failure_keeps_dirty_latch() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    let mut store =
        DefineSetStore::with_defines(data_dir.join("defines.toml"), set(&[("A", true)]));

    store.toggle_entry(0).unwrap();
    assert!(store.detect_change());
    assert!(store.is_dirty());

    std::fs::remove_dir_all(&data_dir).unwrap();
    std::fs::write(&data_dir, "").unwrap();
    let err = store.toggle_entry(0).unwrap_err();

    assert!(matches!(err, StoreError::Persist { .. }), "got {err:?}");
    assert_eq!(store.current().entries(), set(&[("A", false)]).entries());
    assert!(store.is_dirty());
    assert!(!store.detect_change());
    assert!(store.is_dirty());
}
