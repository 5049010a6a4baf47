//! Reorder requests.
//!
//! [`ReorderArgs`] is the loose shape a transport hands over (every field
//! optional, camelCase on the wire). [`ReorderRequest`] is the validated form:
//! each side names exactly one neighbor or one boundary, so conflicting
//! directives cannot be represented past the conversion.

use crate::{EntityId, Error, Result};
use serde::{Deserialize, Serialize};

/// What the target will sit in front of once moved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Before {
    /// The target lands immediately before this entity.
    Entity(EntityId),
    /// The target becomes the last entity.
    Last,
}

/// What the target will sit behind once moved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum After {
    /// The target lands immediately after this entity.
    Entity(EntityId),
    /// The target becomes the first entity.
    First,
}

/// Wire-shaped reorder arguments.
///
/// Exactly one of `before_id`/`to_last` and exactly one of
/// `after_id`/`to_first` must be supplied. An empty id string counts as
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderArgs {
    pub target_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_id: Option<EntityId>,
    #[serde(default)]
    pub to_last: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_id: Option<EntityId>,
    #[serde(default)]
    pub to_first: bool,
}

impl ReorderArgs {
    /// Parses arguments from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A validated reorder request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReorderRequest {
    pub target_id: EntityId,
    pub before: Before,
    pub after: After,
}

impl ReorderRequest {
    #[must_use]
    pub fn new(target_id: impl Into<EntityId>, before: Before, after: After) -> Self {
        Self {
            target_id: target_id.into(),
            before,
            after,
        }
    }

    /// Moves `target` into the gap between `after` and `before`.
    #[must_use]
    pub fn between(
        target_id: impl Into<EntityId>,
        after_id: impl Into<EntityId>,
        before_id: impl Into<EntityId>,
    ) -> Self {
        Self::new(
            target_id,
            Before::Entity(before_id.into()),
            After::Entity(after_id.into()),
        )
    }

    /// Moves `target` to the head, in front of the current first entity.
    #[must_use]
    pub fn to_first(target_id: impl Into<EntityId>, before_id: impl Into<EntityId>) -> Self {
        Self::new(target_id, Before::Entity(before_id.into()), After::First)
    }

    /// Moves `target` to the tail, behind the current last entity.
    #[must_use]
    pub fn to_last(target_id: impl Into<EntityId>, after_id: impl Into<EntityId>) -> Self {
        Self::new(target_id, Before::Last, After::Entity(after_id.into()))
    }

    /// The request for a collection whose only entity is the target.
    #[must_use]
    pub fn alone(target_id: impl Into<EntityId>) -> Self {
        Self::new(target_id, Before::Last, After::First)
    }

    /// Parses and validates a JSON document in [`ReorderArgs`] shape.
    pub fn from_json(json: &str) -> Result<Self> {
        ReorderArgs::from_json(json)?.try_into()
    }
}

fn present(id: Option<EntityId>) -> Option<EntityId> {
    id.filter(|id| !id.as_str().is_empty())
}

impl TryFrom<ReorderArgs> for ReorderRequest {
    type Error = Error;

    fn try_from(args: ReorderArgs) -> Result<Self> {
        if args.target_id.as_str().is_empty() {
            return Err(Error::validation("reorder operation requires { targetId }"));
        }

        let before = match (present(args.before_id), args.to_last) {
            (Some(id), true) => {
                return Err(Error::Validation(format!(
                    "reorder operation cannot specify both {{ beforeId: \"{id}\", toLast: true }}"
                )));
            }
            (Some(id), false) => Before::Entity(id),
            (None, true) => Before::Last,
            (None, false) => {
                return Err(Error::validation(
                    "reorder operation requires one of { beforeId, toLast }",
                ));
            }
        };

        let after = match (present(args.after_id), args.to_first) {
            (Some(id), true) => {
                return Err(Error::Validation(format!(
                    "reorder operation cannot specify both {{ afterId: \"{id}\", toFirst: true }}"
                )));
            }
            (Some(id), false) => After::Entity(id),
            (None, true) => After::First,
            (None, false) => {
                return Err(Error::validation(
                    "reorder operation requires one of { afterId, toFirst }",
                ));
            }
        };

        Ok(Self {
            target_id: args.target_id,
            before,
            after,
        })
    }
}

impl From<ReorderRequest> for ReorderArgs {
    fn from(request: ReorderRequest) -> Self {
        let (before_id, to_last) = match request.before {
            Before::Entity(id) => (Some(id), false),
            Before::Last => (None, true),
        };
        let (after_id, to_first) = match request.after {
            After::Entity(id) => (Some(id), false),
            After::First => (None, true),
        };
        Self {
            target_id: request.target_id,
            before_id,
            to_last,
            after_id,
            to_first,
        }
    }
}
