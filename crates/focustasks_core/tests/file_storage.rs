use focustasks_core::{FileStorage, KeyValueStorage, StorageError, Task, TaskId, TaskStore};
use std::fs;

#[test]
fn missing_key_reads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    assert_eq!(storage.get_item("focustasks_0211").unwrap(), None);
}

#[test]
fn set_creates_directory_and_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("nested"));

    storage.set_item("k", "first").unwrap();
    storage.set_item("k", "second").unwrap();

    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("second"));
    let on_disk = fs::read_to_string(dir.path().join("nested").join("k.json")).unwrap();
    assert_eq!(on_disk, "second");
    assert!(!dir.path().join("nested").join(".k.json.tmp").exists());
}

#[test]
fn keys_that_escape_the_directory_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());

    for key in ["", "../outside", "a/b", ".hidden"] {
        let err = storage.set_item(key, "x").unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)), "key `{key}`");
    }
}

#[test]
fn store_survives_reopen_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = TaskStore::open(FileStorage::new(dir.path()), "focustasks_0211");
        store.add(Task::with_id("a", "persist me")).unwrap();
        store.toggle(&TaskId::from("a")).unwrap();
    }

    let reopened = TaskStore::open(FileStorage::new(dir.path()), "focustasks_0211");
    let tasks = reopened.list();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "persist me");
    assert!(tasks[0].done);
}

#[test]
fn corrupt_file_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("focustasks_0211.json"), "[{broken").unwrap();

    let store = TaskStore::open(FileStorage::new(dir.path()), "focustasks_0211");
    assert!(store.is_empty());
}
