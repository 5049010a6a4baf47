//! Sort key providers for Ordinal.
//!
//! A [`SortKeyProvider`] produces a key that orders strictly between two
//! existing keys. Two keyspaces are provided:
//!
//! - [`Base64Keyspace`]: unbounded fractional keys; never runs out of room
//! - [`PaddedNumericKeyspace`]: fixed-width integers; reports
//!   [`Error::KeyspaceExhausted`](ordinal_types::Error::KeyspaceExhausted)
//!   when two neighbors are consecutive
//!
//! The keyspace is chosen once per collection through [`KeyspaceConfig`] and
//! dispatched through the [`Keyspace`] enum. Keys from one keyspace are not
//! meaningful in the other; switching a collection means rewriting every key.

mod base64;
mod keyspace;
mod padded;

pub use base64::{ALPHABET as BASE64_ALPHABET, Base64Keyspace};
pub use keyspace::{Keyspace, KeyspaceConfig, KeyspaceKind};
pub use padded::{DEFAULT_WIDTH, MAX_WIDTH, PaddedNumericKeyspace};

use ordinal_types::{Result, SortKey};
use std::sync::Arc;

/// Generates keys strictly between two bounds.
pub trait SortKeyProvider: Send + Sync {
    /// Which keyspace this provider draws from.
    fn kind(&self) -> KeyspaceKind;

    /// Checks that `key` belongs to this keyspace.
    fn validate_key(&self, key: &SortKey) -> Result<()>;

    /// Returns a key with `lower < key < upper`.
    ///
    /// A `None` bound is open on that side; with both open the result is a
    /// starting key for an empty collection.
    fn key_between(&self, lower: Option<&SortKey>, upper: Option<&SortKey>) -> Result<SortKey>;

    /// Returns `count` ascending keys, all strictly between the bounds.
    ///
    /// Keys are spread by repeated bisection, so they stay evenly spaced and
    /// short. Useful for seeding a new collection or inserting a batch into
    /// one gap.
    fn keys_between(
        &self,
        lower: Option<&SortKey>,
        upper: Option<&SortKey>,
        count: usize,
    ) -> Result<Vec<SortKey>> {
        let mut keys = Vec::with_capacity(count);
        fill_between(self, lower, upper, count, &mut keys)?;
        Ok(keys)
    }
}

fn fill_between<P: SortKeyProvider + ?Sized>(
    provider: &P,
    lower: Option<&SortKey>,
    upper: Option<&SortKey>,
    count: usize,
    out: &mut Vec<SortKey>,
) -> Result<()> {
    if count == 0 {
        return Ok(());
    }
    let mid = provider.key_between(lower, upper)?;
    let left = (count - 1) / 2;
    fill_between(provider, lower, Some(&mid), left, out)?;
    out.push(mid.clone());
    fill_between(provider, Some(&mid), upper, count - 1 - left, out)
}

impl<P: SortKeyProvider + ?Sized> SortKeyProvider for &P {
    fn kind(&self) -> KeyspaceKind {
        (**self).kind()
    }

    fn validate_key(&self, key: &SortKey) -> Result<()> {
        (**self).validate_key(key)
    }

    fn key_between(&self, lower: Option<&SortKey>, upper: Option<&SortKey>) -> Result<SortKey> {
        (**self).key_between(lower, upper)
    }
}

impl<P: SortKeyProvider + ?Sized> SortKeyProvider for Arc<P> {
    fn kind(&self) -> KeyspaceKind {
        (**self).kind()
    }

    fn validate_key(&self, key: &SortKey) -> Result<()> {
        (**self).validate_key(key)
    }

    fn key_between(&self, lower: Option<&SortKey>, upper: Option<&SortKey>) -> Result<SortKey> {
        (**self).key_between(lower, upper)
    }
}

impl<P: SortKeyProvider + ?Sized> SortKeyProvider for Box<P> {
    fn kind(&self) -> KeyspaceKind {
        (**self).kind()
    }

    fn validate_key(&self, key: &SortKey) -> Result<()> {
        (**self).validate_key(key)
    }

    fn key_between(&self, lower: Option<&SortKey>, upper: Option<&SortKey>) -> Result<SortKey> {
        (**self).key_between(lower, upper)
    }
}
