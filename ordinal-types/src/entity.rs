//! The ordering contract of an entity, and snapshot checks.

use crate::{EntityId, Error, Result, SortKey};
use serde::{Deserialize, Serialize};

/// The only two things the reorder pipeline reads from an entity.
///
/// Domain structs implement this directly; everything else they carry is
/// opaque to ordering.
pub trait Ordered {
    fn id(&self) -> &EntityId;
    fn sort_key(&self) -> &SortKey;
}

impl<T: Ordered + ?Sized> Ordered for &T {
    fn id(&self) -> &EntityId {
        (**self).id()
    }

    fn sort_key(&self) -> &SortKey {
        (**self).sort_key()
    }
}

/// A bare entity with nothing but an id and a sort key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub sort_key: SortKey,
}

impl Entity {
    #[must_use]
    pub fn new(id: impl Into<EntityId>, sort_key: impl Into<SortKey>) -> Self {
        Self {
            id: id.into(),
            sort_key: sort_key.into(),
        }
    }
}

impl Ordered for Entity {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn sort_key(&self) -> &SortKey {
        &self.sort_key
    }
}

/// Checks that a snapshot is strictly ascending by sort key.
///
/// Strictness also rules out two entities sharing a key, which would leave
/// their relative order undefined.
pub fn ensure_ascending<T: Ordered>(entities: &[T]) -> Result<()> {
    for pair in entities.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if prev.sort_key() >= next.sort_key() {
            return Err(Error::Validation(format!(
                "snapshot is not strictly ascending: {{ id: \"{}\", sortKey: \"{}\" }} precedes {{ id: \"{}\", sortKey: \"{}\" }}",
                prev.id(),
                prev.sort_key(),
                next.id(),
                next.sort_key(),
            )));
        }
    }
    Ok(())
}
