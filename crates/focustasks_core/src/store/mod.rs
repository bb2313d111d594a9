//! State ownership layer.
//!
//! # Responsibility
//! - Own the authoritative task collection.
//! - Persist the full collection after every mutation.
//!
//! # Invariants
//! - Callers only ever receive owned snapshots, never references into state.
//! - In-memory state and persisted state are equal whenever a call returns.

pub mod task_store;
