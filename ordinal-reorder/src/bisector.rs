//! Bisection: splitting the remainder around the target's new position.

use crate::resolver::{NeighborDescriptor, without_target};
use ordinal_types::{Error, IdField, Ordered, Result, SortKey};
use tracing::debug;

/// The remainder of the snapshot, split at the target's new position.
///
/// `befores` ends with the `after` neighbor and `afters` starts with the
/// `before` neighbor; together they hold every entity except the target, in
/// their original order.
#[derive(Debug, PartialEq, Eq)]
pub struct Bisection<'a, T> {
    pub target: &'a T,
    /// Position the target will occupy once moved.
    pub target_index: usize,
    pub befores: Vec<&'a T>,
    pub afters: Vec<&'a T>,
}

impl<T> Clone for Bisection<'_, T> {
    fn clone(&self) -> Self {
        Self {
            target: self.target,
            target_index: self.target_index,
            befores: self.befores.clone(),
            afters: self.afters.clone(),
        }
    }
}

impl<T: Ordered> Bisection<'_, T> {
    /// Key the new key must exceed, if anything comes before the target.
    #[must_use]
    pub fn lower_bound(&self) -> Option<&SortKey> {
        self.befores.last().map(|entity| entity.sort_key())
    }

    /// Key the new key must stay below, if anything comes after the target.
    #[must_use]
    pub fn upper_bound(&self) -> Option<&SortKey> {
        self.afters.first().map(|entity| entity.sort_key())
    }
}

/// Splits `entities` around the position described by `neighbors`.
///
/// `neighbors` must come from [`resolve_neighbors`](crate::resolve_neighbors)
/// on the same snapshot. The lookups are repeated defensively and fail with
/// `NotFound` if the snapshot no longer matches.
pub fn bisect<'a, T: Ordered>(
    entities: &'a [T],
    neighbors: &NeighborDescriptor<'a, T>,
) -> Result<Bisection<'a, T>> {
    let target = neighbors.target;
    if entities.get(target.index).map(Ordered::id) != Some(target.entity.id()) {
        return Err(Error::NotFound {
            field: IdField::Target,
            id: target.entity.id().clone(),
        });
    }

    let mut remainder = without_target(entities, target.index);

    let bisection = match (neighbors.to_first, neighbors.after) {
        (true, _) => Bisection {
            target: target.entity,
            target_index: 0,
            befores: Vec::new(),
            afters: remainder,
        },
        (false, Some(after)) => {
            if remainder.get(after.index).map(|e| e.id()) != Some(after.entity.id()) {
                return Err(Error::NotFound {
                    field: IdField::After,
                    id: after.entity.id().clone(),
                });
            }
            // the target goes directly behind `after`
            let target_index = after.index + 1;
            let afters = remainder.split_off(target_index);
            Bisection {
                target: target.entity,
                target_index,
                befores: remainder,
                afters,
            }
        }
        (false, None) => {
            return Err(Error::validation(
                "reorder operation has neither an { afterId } nor { toFirst: true } to bisect at",
            ));
        }
    };

    debug!(
        target_id = %target.entity.id(),
        target_index = bisection.target_index,
        befores = bisection.befores.len(),
        afters = bisection.afters.len(),
        "reorder bisected"
    );

    Ok(bisection)
}
