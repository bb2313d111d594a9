//! Projection of store snapshots onto the page.
//!
//! # Responsibility
//! - Compute summary statistics over a snapshot.
//! - Build list fragments from a snapshot (no incremental diffing).
//! - Route user events back into store calls, then re-render.
//!
//! # Invariants
//! - Every render starts from a freshly read snapshot.
//! - Task titles only ever enter the tree as text nodes.

pub mod dom;
pub mod page;
pub mod render;
pub mod summary;
