use focustasks_core::{KeyValueStorage, MemoryStorage, Task, TaskId, TaskStore};

const KEY: &str = "focustasks_0211";

fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.id.as_str()).collect()
}

#[test]
fn missing_state_opens_empty() {
    let storage = MemoryStorage::new();
    let store = TaskStore::open(&storage, KEY);
    assert!(store.list().is_empty());
    assert_eq!(store.storage_key(), KEY);
    assert_eq!(storage.write_count(), 0);
}

#[test]
fn corrupt_state_opens_empty() {
    for raw in ["{not json", "42", r#"{"id":"a"}"#, r#"[{"title":"no id"}]"#] {
        let storage = MemoryStorage::new();
        storage.seed(KEY, raw);
        let store = TaskStore::open(&storage, KEY);
        assert!(store.list().is_empty(), "state `{raw}` should open empty");
    }
}

#[test]
fn add_appends_and_persists_full_collection() {
    let storage = MemoryStorage::new();
    let mut store = TaskStore::open(&storage, KEY);

    store.add(Task::with_id("a", "first")).unwrap();
    let snapshot = store.add(Task::with_id("b", "second")).unwrap();

    assert_eq!(ids(&snapshot), vec!["a", "b"]);
    assert_eq!(snapshot, store.list());

    let persisted: Vec<Task> =
        serde_json::from_str(&storage.get_item(KEY).unwrap().unwrap()).unwrap();
    assert_eq!(persisted, snapshot);
    assert_eq!(storage.write_count(), 2);
}

#[test]
fn blank_titles_are_rejected_without_writing() {
    let storage = MemoryStorage::new();
    let mut store = TaskStore::open(&storage, KEY);
    store.add(Task::with_id("a", "keep")).unwrap();

    for title in ["", "   ", "\t\n", "\u{FEFF}"] {
        let snapshot = store.add(Task::with_id("x", title)).unwrap();
        assert_eq!(snapshot.len(), 1);
    }
    assert_eq!(storage.write_count(), 1);
}

#[test]
fn toggle_twice_restores_done_flag() {
    let storage = MemoryStorage::new();
    let mut store = TaskStore::open(&storage, KEY);
    store.add(Task::with_id("a", "flip me")).unwrap();
    store.add(Task::with_id("b", "leave me")).unwrap();
    let id = TaskId::from("a");

    let once = store.toggle(&id).unwrap();
    assert!(once[0].done);
    assert!(!once[1].done);

    let twice = store.toggle(&id).unwrap();
    assert!(!twice[0].done);
    assert_eq!(ids(&twice), vec!["a", "b"]);
}

#[test]
fn unknown_ids_are_no_ops_that_still_persist() {
    let storage = MemoryStorage::new();
    let mut store = TaskStore::open(&storage, KEY);
    store.add(Task::with_id("a", "only")).unwrap();
    let before = store.list();

    assert_eq!(store.toggle(&TaskId::from("missing")).unwrap(), before);
    assert_eq!(store.remove(&TaskId::from("missing")).unwrap(), before);
    assert_eq!(storage.write_count(), 3);
}

#[test]
fn remove_is_idempotent() {
    let storage = MemoryStorage::new();
    let mut store = TaskStore::open(&storage, KEY);
    store.add(Task::with_id("a", "one")).unwrap();
    store.add(Task::with_id("b", "two")).unwrap();
    let id = TaskId::from("a");

    let first = store.remove(&id).unwrap();
    let second = store.remove(&id).unwrap();
    assert_eq!(ids(&first), vec!["b"]);
    assert_eq!(first, second);
}

#[test]
fn snapshots_are_isolated_from_store_state() {
    let storage = MemoryStorage::new();
    let mut store = TaskStore::open(&storage, KEY);
    let mut snapshot = store.add(Task::with_id("a", "original")).unwrap();

    snapshot[0].title = "mutated".to_string();
    snapshot[0].done = true;
    snapshot.clear();

    let fresh = store.list();
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].title, "original");
    assert!(!fresh[0].done);
}

#[test]
fn duplicate_ids_are_not_deduplicated() {
    let storage = MemoryStorage::new();
    let mut store = TaskStore::open(&storage, KEY);
    store.add(Task::with_id("same", "one")).unwrap();
    let snapshot = store.add(Task::with_id("same", "two")).unwrap();
    assert_eq!(snapshot.len(), 2);
}

#[test]
fn mixed_sequence_reflects_net_effect() {
    let storage = MemoryStorage::new();
    let mut store = TaskStore::open(&storage, KEY);

    store.add(Task::with_id("a", "a")).unwrap();
    store.add(Task::with_id("b", "b")).unwrap();
    store.toggle(&TaskId::from("a")).unwrap();
    store.add(Task::with_id("c", "c")).unwrap();
    store.remove(&TaskId::from("b")).unwrap();
    store.toggle(&TaskId::from("c")).unwrap();
    store.toggle(&TaskId::from("a")).unwrap();
    let result = store.list();

    assert_eq!(ids(&result), vec!["a", "c"]);
    assert!(!result[0].done);
    assert!(result[1].done);
}

#[test]
fn reopening_from_persisted_state_round_trips() {
    let storage = MemoryStorage::new();
    let original = {
        let mut store = TaskStore::open(&storage, KEY);
        store.add(Task::with_id("a", "Tom & \"Jerry\"")).unwrap();
        store.add(Task::with_id("b", "<b>bold</b>")).unwrap();
        store.toggle(&TaskId::from("b")).unwrap()
    };

    let reopened = TaskStore::open(&storage, KEY);
    assert_eq!(reopened.list(), original);
}

#[test]
fn stores_under_different_keys_do_not_share_state() {
    let storage = MemoryStorage::new();
    let mut first = TaskStore::open(&storage, "focustasks_a");
    first.add(Task::with_id("a", "first only")).unwrap();

    let second = TaskStore::open(&storage, "focustasks_b");
    assert!(second.is_empty());
}

#[test]
fn quota_failure_surfaces_and_leaves_state_untouched() {
    let storage = MemoryStorage::with_quota(KEY.len() + 50);
    let mut store = TaskStore::open(&storage, KEY);
    store.add(Task::with_id("a", "fits")).unwrap();

    let err = store
        .add(Task::with_id("b", "this one does not fit in the quota"))
        .unwrap_err();
    assert!(matches!(
        err,
        focustasks_core::StoreError::Storage(focustasks_core::StorageError::QuotaExceeded { .. })
    ));
    assert_eq!(ids(&store.list()), vec!["a"]);
    assert_eq!(
        TaskStore::open(&storage, KEY).list(),
        store.list(),
        "persisted state must match memory after a failed write"
    );
}
