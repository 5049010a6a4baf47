//! Core type definitions for Ordinal.
//!
//! This crate defines the types shared by the keyspaces and the reorder
//! pipeline:
//! - Entity identifiers and sort keys
//! - The [`Ordered`] contract every reorderable entity satisfies
//! - Reorder requests, both wire-shaped ([`ReorderArgs`]) and validated
//!   ([`ReorderRequest`])
//! - The error taxonomy used across the workspace
//!
//! Persistence of entities is not modelled here. Callers own their entities
//! and hand this workspace a snapshot ordered by sort key.

mod entity;
mod ids;
mod key;
mod request;

pub use entity::{Entity, Ordered, ensure_ascending};
pub use ids::EntityId;
pub use key::SortKey;
pub use request::{After, Before, ReorderArgs, ReorderRequest};

use std::fmt;
use std::sync::Arc;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Which request field an id was supplied through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdField {
    Target,
    Before,
    After,
}

impl fmt::Display for IdField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Target => "targetId",
            Self::Before => "beforeId",
            Self::After => "afterId",
        })
    }
}

/// Errors that can occur while validating or executing a reorder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An id in the request does not resolve to an entity in the snapshot.
    #[error("reorder operation cannot locate {{ {field}: \"{id}\" }}")]
    NotFound { field: IdField, id: EntityId },

    /// Conflicting directives, broken adjacency, or a malformed snapshot.
    #[error("{0}")]
    Validation(String),

    /// A bounded keyspace has no value strictly between the two keys.
    #[error("keyspace exhausted between {lower:?} and {upper:?}")]
    KeyspaceExhausted {
        lower: Option<SortKey>,
        upper: Option<SortKey>,
    },

    /// A key that does not belong to the provider's keyspace.
    #[error("invalid sort key {key:?}: {reason}")]
    InvalidKey { key: SortKey, reason: String },

    /// `lower` does not order strictly below `upper`.
    #[error("invalid key bounds: {lower} is not below {upper}")]
    InvalidBounds { lower: SortKey, upper: SortKey },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] JsonError),
}

/// A shared `serde_json` error.
///
/// Held behind an `Arc` so [`Error`] stays `Clone`. Two values are equal
/// when they render the same message.
#[derive(Debug, Clone)]
pub struct JsonError(Arc<serde_json::Error>);

impl JsonError {
    /// The underlying `serde_json` error.
    #[must_use]
    pub fn inner(&self) -> &serde_json::Error {
        &self.0
    }
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for JsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.0.as_ref())
    }
}

impl PartialEq for JsonError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.to_string() == other.0.to_string()
    }
}

impl Eq for JsonError {}

impl From<serde_json::Error> for JsonError {
    fn from(err: serde_json::Error) -> Self {
        Self(Arc::new(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.into())
    }
}

impl Error {
    /// Shorthand for a [`Error::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns true for [`Error::NotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true for [`Error::Validation`].
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true for [`Error::KeyspaceExhausted`].
    #[must_use]
    pub fn is_keyspace_exhausted(&self) -> bool {
        matches!(self, Self::KeyspaceExhausted { .. })
    }
}
