//! Directory-backed storage: one `<key>.json` file per key.
//!
//! # Invariants
//! - Writes go to a sibling temp file first and are renamed into place, so a
//!   reader never sees a half-written value.
//! - Keys containing path separators or starting with `.` are rejected.

use super::{KeyValueStorage, StorageError, StorageResult};
use log::{error, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn item_path(&self, key: &str) -> StorageResult<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && !key.contains(['/', '\\'])
            && !key.contains('\0');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.item_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.item_path(key)?;
        let tmp_path = self.base_path.join(format!(".{key}.json.tmp"));
        let io_err = |source| StorageError::Io {
            key: key.to_string(),
            source,
        };

        let result = fs::create_dir_all(&self.base_path)
            .and_then(|()| fs::write(&tmp_path, value))
            .and_then(|()| fs::rename(&tmp_path, &path));

        match result {
            Ok(()) => {
                info!(
                    "event=storage_write module=storage status=ok backend=file bytes={}",
                    value.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=storage_write module=storage status=error backend=file error={}",
                    err
                );
                let _ = fs::remove_file(&tmp_path);
                Err(io_err(err))
            }
        }
    }
}
