//! The persistence seam the pipeline commits through.

use ordinal_types::{EntityId, SortKey};

/// The persistence seam: writes one entity's new sort key.
///
/// Implementations own the serialization boundary. Two reorders that both
/// validated against the same stale snapshot must not both commit, so a
/// store typically checks a version or holds a transaction opened before
/// the snapshot was read.
///
/// Errors are returned to the caller untouched; the pipeline never retries.
pub trait SortKeyStore {
    type Error: std::error::Error + Send + Sync + 'static;

    fn commit_sort_key(&mut self, id: &EntityId, key: &SortKey) -> Result<(), Self::Error>;
}

/// Any `FnMut(&EntityId, &SortKey) -> Result<(), E>` closure is a store.
impl<F, E> SortKeyStore for F
where
    F: FnMut(&EntityId, &SortKey) -> Result<(), E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn commit_sort_key(&mut self, id: &EntityId, key: &SortKey) -> Result<(), E> {
        self(id, key)
    }
}
