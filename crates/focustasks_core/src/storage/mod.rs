//! Key-value storage capability used for all persisted state.
//!
//! # Responsibility
//! - Define the string-to-string storage contract the store depends on.
//! - Provide in-memory and file-backed implementations for hosts and tests.
//!
//! # Invariants
//! - `set_item` is a full overwrite of the value under `key`.
//! - A failed `set_item` leaves the previously stored value readable.
//! - Methods take `&self`, so one handle can be shared between the task store
//!   and the theme preference.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Io {
        key: String,
        source: std::io::Error,
    },
    QuotaExceeded {
        key: String,
        needed: usize,
        available: usize,
    },
    InvalidKey(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { key, source } => write!(f, "storage io failure for `{key}`: {source}"),
            Self::QuotaExceeded {
                key,
                needed,
                available,
            } => write!(
                f,
                "storage quota exceeded writing `{key}`: needed {needed} bytes, {available} available"
            ),
            Self::InvalidKey(key) => write!(f, "invalid storage key `{key}`"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::QuotaExceeded { .. } | Self::InvalidKey(_) => None,
        }
    }
}

/// Browser-style local storage: string values addressed by string keys.
pub trait KeyValueStorage {
    /// Returns the stored value, or `None` when the key was never written.
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Rc<T> {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }
}
