//! Persistent task store.
//!
//! # Responsibility
//! - Hydrate the task collection from storage once, at construction.
//! - Apply add/toggle/remove as whole-collection transforms.
//! - Write the full collection back before returning from each mutation.
//!
//! # Invariants
//! - Construction never fails: absent, unreadable or malformed state opens
//!   as an empty collection.
//! - In-memory state is replaced only after the write succeeded.
//! - Blank titles are never stored; unknown ids are no-ops.

use crate::model::task::{Task, TaskId};
use crate::storage::{KeyValueStorage, StorageError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while persisting the task collection.
#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode task collection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Single authoritative owner of the task collection.
pub struct TaskStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    tasks: Vec<Task>,
}

impl<S: KeyValueStorage> TaskStore<S> {
    /// Opens the store under `key`, hydrating from whatever `storage` holds.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let tasks = hydrate(&storage, &key);
        info!(
            "event=store_open module=store status=ok count={}",
            tasks.len()
        );
        Self {
            storage,
            key,
            tasks,
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns an independent copy of the collection in insertion order.
    pub fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Appends `task` and persists.
    ///
    /// A blank title (after trimming) is rejected silently: nothing is
    /// written and the current snapshot is returned. Ids are taken as given
    /// and not checked for duplicates.
    pub fn add(&mut self, task: Task) -> StoreResult<Vec<Task>> {
        if task.has_blank_title() {
            info!("event=task_add module=store status=skipped reason=blank_title");
            return Ok(self.list());
        }

        let mut next = self.tasks.clone();
        next.push(task);
        self.commit("task_add", next)
    }

    /// Inverts `done` on the task with `id`. Unknown ids persist unchanged.
    pub fn toggle(&mut self, id: &TaskId) -> StoreResult<Vec<Task>> {
        let next = self
            .tasks
            .iter()
            .map(|task| {
                if &task.id == id {
                    Task {
                        done: !task.done,
                        ..task.clone()
                    }
                } else {
                    task.clone()
                }
            })
            .collect();
        self.commit("task_toggle", next)
    }

    /// Drops the task with `id`. Unknown ids persist unchanged.
    pub fn remove(&mut self, id: &TaskId) -> StoreResult<Vec<Task>> {
        let next = self
            .tasks
            .iter()
            .filter(|task| &task.id != id)
            .cloned()
            .collect();
        self.commit("task_remove", next)
    }

    fn commit(&mut self, event: &str, next: Vec<Task>) -> StoreResult<Vec<Task>> {
        if let Err(err) = self.persist(&next) {
            error!(
                "event={} module=store status=error count={} error={}",
                event,
                next.len(),
                err
            );
            return Err(err);
        }

        self.tasks = next;
        info!(
            "event={} module=store status=ok count={}",
            event,
            self.tasks.len()
        );
        Ok(self.list())
    }

    fn persist(&self, tasks: &[Task]) -> StoreResult<()> {
        let encoded = serde_json::to_string(tasks)?;
        self.storage.set_item(&self.key, &encoded)?;
        Ok(())
    }
}

fn hydrate<S: KeyValueStorage>(storage: &S, key: &str) -> Vec<Task> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!(
                "event=store_hydrate module=store status=fallback reason=read_failed error={}",
                err
            );
            return Vec::new();
        }
    };

    // `null` is what a JSON round-trip of an unset value leaves behind.
    match serde_json::from_str::<Option<Vec<Task>>>(&raw) {
        Ok(tasks) => tasks.unwrap_or_default(),
        Err(err) => {
            warn!(
                "event=store_hydrate module=store status=fallback reason=malformed line={} column={}",
                err.line(),
                err.column()
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TaskStore;
    use crate::model::task::Task;
    use crate::storage::{KeyValueStorage, MemoryStorage};

    const KEY: &str = "focustasks_test";

    #[test]
    fn null_state_opens_empty() {
        let storage = MemoryStorage::new();
        storage.seed(KEY, "null");
        let store = TaskStore::open(&storage, KEY);
        assert!(store.is_empty());
    }

    #[test]
    fn failed_write_keeps_previous_state() {
        let storage = MemoryStorage::with_quota(KEY.len() + 70);
        let mut store = TaskStore::open(&storage, KEY);
        store.add(Task::with_id("a", "short")).unwrap();
        let persisted = storage.get_item(KEY).unwrap();

        let err = store
            .add(Task::with_id("b", "a title long enough to blow the quota"))
            .unwrap_err();
        assert!(err.to_string().contains("quota"));
        assert_eq!(store.len(), 1);
        assert_eq!(storage.get_item(KEY).unwrap(), persisted);
    }
}
