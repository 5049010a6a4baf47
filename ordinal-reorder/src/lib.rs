//! Single-key reordering for Ordinal.
//!
//! Moving one entity in a persistently ordered collection rewrites exactly
//! one sort key. The pipeline runs strictly downward:
//!
//! 1. [`resolve_neighbors`] checks the request against the snapshot and
//!    yields a [`NeighborDescriptor`]
//! 2. [`bisect`] splits the remaining entities around the target's new
//!    position into a [`Bisection`]
//! 3. a [`SortKeyProvider`](ordinal_keys::SortKeyProvider) generates a key
//!    between the last "before" and the first "after"
//! 4. a [`SortKeyStore`] commits that one key
//!
//! Every step before the commit is pure: it reads the caller's snapshot and
//! never mutates it. A failure anywhere aborts before anything is written.
//!
//! Nothing here serializes two reorders aimed at the same gap. The store is
//! expected to hold a lock, transaction, or version check from the snapshot
//! read through the commit.

mod bisector;
mod config;
mod orchestrator;
mod resolver;
mod store;

pub use bisector::{Bisection, bisect};
pub use config::ReorderConfig;
pub use orchestrator::{ReorderError, ReorderPlan, Reorderer, reorder};
pub use resolver::{Located, NeighborDescriptor, resolve_neighbors, without_target};
pub use store::SortKeyStore;
