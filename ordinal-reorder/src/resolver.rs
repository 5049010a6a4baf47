//! Neighbor resolution: validating a request against the current order.
//!
//! All lookups happen against the snapshot with the target removed. Given
//! `[A, B, C]` and "move B between A and C", the remainder is `[A, C]`, in
//! which A and C are adjacent, so the request is valid (and a no-op).

use ordinal_types::{After, Before, EntityId, Error, IdField, Ordered, ReorderRequest, Result};
use tracing::debug;

/// An entity together with its position in the sequence it was found in.
#[derive(Debug, PartialEq, Eq)]
pub struct Located<'a, T> {
    pub entity: &'a T,
    pub index: usize,
}

impl<T> Clone for Located<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Located<'_, T> {}

/// The validated shape of a move.
///
/// `target.index` is a position in the full snapshot; `before.index` and
/// `after.index` are positions in the snapshot without the target.
#[derive(Debug, PartialEq, Eq)]
pub struct NeighborDescriptor<'a, T> {
    pub target: Located<'a, T>,
    /// The entity the target will precede; `None` when it becomes last.
    pub before: Option<Located<'a, T>>,
    /// The entity the target will follow; `None` when it becomes first.
    pub after: Option<Located<'a, T>>,
    pub to_first: bool,
    pub to_last: bool,
}

impl<T> Clone for NeighborDescriptor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NeighborDescriptor<'_, T> {}

/// The snapshot minus the entity at `target_index`, order preserved.
///
/// Filters by position, so two entities that happen to compare equal are
/// never both dropped.
#[must_use]
pub fn without_target<T>(entities: &[T], target_index: usize) -> Vec<&T> {
    entities
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != target_index)
        .map(|(_, entity)| entity)
        .collect()
}

fn locate<'a, T: Ordered>(
    remainder: &[&'a T],
    id: &EntityId,
    field: IdField,
) -> Result<Located<'a, T>> {
    remainder
        .iter()
        .position(|entity| entity.id() == id)
        .map(|index| Located {
            entity: remainder[index],
            index,
        })
        .ok_or_else(|| Error::NotFound {
            field,
            id: id.clone(),
        })
}

/// Validates `request` against `entities` and returns the canonical neighbors.
///
/// `entities` must be in ascending sort-key order. Declared neighbors must
/// already sit where the request says: both adjacent in the remainder, or
/// the one neighbor at the boundary the target is joining. There is no
/// fallback to a nearby valid position.
pub fn resolve_neighbors<'a, T: Ordered>(
    entities: &'a [T],
    request: &ReorderRequest,
) -> Result<NeighborDescriptor<'a, T>> {
    let target_index = entities
        .iter()
        .position(|entity| entity.id() == &request.target_id)
        .ok_or_else(|| Error::NotFound {
            field: IdField::Target,
            id: request.target_id.clone(),
        })?;
    let target = Located {
        entity: &entities[target_index],
        index: target_index,
    };

    let remainder = without_target(entities, target_index);

    let before = match &request.before {
        Before::Last => None,
        Before::Entity(id) => Some(locate(&remainder, id, IdField::Before)?),
    };
    let after = match &request.after {
        After::First => None,
        After::Entity(id) => Some(locate(&remainder, id, IdField::After)?),
    };

    match (before, after) {
        (None, None) => {
            if !remainder.is_empty() {
                return Err(Error::validation(
                    "reorder operation cannot reorder to first-and-last unless it only contains the target",
                ));
            }
        }
        (None, Some(after)) => {
            // joining the tail: nothing may currently follow `after`
            if after.index + 1 != remainder.len() {
                return Err(Error::Validation(format!(
                    "reorder operation expected {{ afterId: \"{}\" }} to be the last Entity",
                    after.entity.id()
                )));
            }
        }
        (Some(before), None) => {
            // joining the head: nothing may currently precede `before`
            if before.index != 0 {
                return Err(Error::Validation(format!(
                    "reorder operation expected {{ beforeId: \"{}\" }} to be the first Entity",
                    before.entity.id()
                )));
            }
        }
        (Some(before), Some(after)) => {
            if after.index + 1 != before.index {
                return Err(Error::Validation(format!(
                    "reorder operation expected {{ beforeId: \"{}\", afterId: \"{}\" }} to be adjacent",
                    before.entity.id(),
                    after.entity.id()
                )));
            }
        }
    }

    debug!(
        target_id = %request.target_id,
        before = ?before.map(|b| b.entity.id()),
        after = ?after.map(|a| a.entity.id()),
        "reorder neighbors resolved"
    );

    Ok(NeighborDescriptor {
        target,
        before,
        after,
        to_first: after.is_none(),
        to_last: before.is_none(),
    })
}
