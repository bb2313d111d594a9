//! Task domain model.
//!
//! # Responsibility
//! - Define the persisted task record and its opaque identifier.
//! - Provide the blank-title check shared by store and page.
//!
//! # Invariants
//! - `id` is generated once and never reassigned.
//! - A stored `title` is never blank after trimming.
//! - `done` starts as `false` and only changes through toggle.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque identifier carried by every task and by every rendered row.
///
/// Persisted as a bare JSON string, so ids written by older builds of the
/// page (any string) keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generates a fresh id from the current timestamp plus random bits.
    ///
    /// Uses UUID v7, whose leading 48 bits are the Unix time in milliseconds
    /// and the rest random, so ids sort by creation time and never collide
    /// in practice.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Missing in hand-edited state is read as `false`.
    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// Creates an open task with a freshly generated id.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(TaskId::generate(), title)
    }

    /// Creates an open task with a caller-provided id.
    pub fn with_id(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            done: false,
        }
    }

    /// Returns whether this task still counts as active.
    pub fn is_active(&self) -> bool {
        !self.done
    }

    /// Returns whether the title is empty once surrounding whitespace is dropped.
    pub fn has_blank_title(&self) -> bool {
        is_blank(&self.title)
    }
}

/// Strips surrounding whitespace, counting U+FEFF as whitespace the way
/// browser `String.prototype.trim` does.
pub fn trim_title(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Blank-input rule used by both the form handler and the store.
pub fn is_blank(value: &str) -> bool {
    trim_title(value).is_empty()
}
