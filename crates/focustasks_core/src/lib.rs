//! Core domain logic for FocusTasks.
//! This crate is the single source of truth for task-list invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;
pub mod theme;
pub mod view;

pub use config::PageConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError, StorageResult};
pub use store::task_store::{StoreError, StoreResult, TaskStore};
pub use theme::{Theme, ThemePreference};
pub use view::dom::{escape_html, Element, Fragment, Node, NodePath};
pub use view::page::{Page, UiEvent, BLANK_TITLE_MESSAGE};
pub use view::render::{render_lists, render_task_row, task_fragment};
pub use view::summary::{summarize, Summary};
