//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the one record the store owns and the renderer projects.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion is a hard removal from the collection; there are no tombstones.

pub mod task;
