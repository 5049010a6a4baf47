//! Padded numeric keyspace: fixed-width, zero-padded decimal integers.
//!
//! Keys are exactly `width` ASCII digits, so string order and numeric order
//! agree. The keyspace is bounded and integer-valued; once two neighbors are
//! consecutive integers there is nothing between them and the caller has to
//! renumber the collection before retrying.

use crate::{KeyspaceKind, SortKeyProvider};
use ordinal_types::{Error, Result, SortKey};
use tracing::warn;

/// Width used when none is configured.
pub const DEFAULT_WIDTH: usize = 12;

/// Widest supported key. `10^18` still fits in a `u64` with room to spare.
pub const MAX_WIDTH: usize = 18;

/// Provider for the padded numeric keyspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddedNumericKeyspace {
    width: usize,
}

impl Default for PaddedNumericKeyspace {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
        }
    }
}

impl PaddedNumericKeyspace {
    /// Creates a keyspace of `width` digits (`1..=MAX_WIDTH`).
    pub fn new(width: usize) -> Result<Self> {
        if width == 0 || width > MAX_WIDTH {
            return Err(Error::InvalidConfig(format!(
                "padded numeric width must be between 1 and {MAX_WIDTH}, got {width}"
            )));
        }
        Ok(Self { width })
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of representable keys, `10^width`.
    #[must_use]
    pub fn capacity(&self) -> u64 {
        // width <= MAX_WIDTH keeps this in range
        10u64.pow(self.width as u32)
    }

    /// Largest representable value.
    #[must_use]
    pub fn max_value(&self) -> u64 {
        self.capacity() - 1
    }

    /// Formats `value` as a key of this keyspace.
    pub fn key_for(&self, value: u64) -> Result<SortKey> {
        if value > self.max_value() {
            return Err(Error::InvalidKey {
                key: SortKey::new(value.to_string()),
                reason: format!("value does not fit in {} digits", self.width),
            });
        }
        Ok(SortKey::new(format!("{value:0width$}", width = self.width)))
    }

    /// Parses a key of this keyspace back into its integer value.
    pub fn value_of(&self, key: &SortKey) -> Result<u64> {
        let invalid = |reason: String| Error::InvalidKey {
            key: key.clone(),
            reason,
        };

        if key.len() != self.width {
            return Err(invalid(format!(
                "expected {} digits, got {}",
                self.width,
                key.len()
            )));
        }
        if !key.as_bytes().iter().all(u8::is_ascii_digit) {
            return Err(invalid("key contains a non-digit character".to_owned()));
        }
        key.as_str()
            .parse::<u64>()
            .map_err(|e| invalid(e.to_string()))
    }
}

impl SortKeyProvider for PaddedNumericKeyspace {
    fn kind(&self) -> KeyspaceKind {
        KeyspaceKind::PaddedNumeric
    }

    fn validate_key(&self, key: &SortKey) -> Result<()> {
        self.value_of(key).map(|_| ())
    }

    fn key_between(&self, lower: Option<&SortKey>, upper: Option<&SortKey>) -> Result<SortKey> {
        // Missing bounds become exclusive sentinels just outside the range.
        let lo = match lower {
            Some(key) => i128::from(self.value_of(key)?),
            None => -1,
        };
        let hi = match upper {
            Some(key) => i128::from(self.value_of(key)?),
            None => i128::from(self.capacity()),
        };

        // equal bounds fall through to exhaustion: duplicate keys need renumbering too
        if let (Some(lower), Some(upper)) = (lower, upper) {
            if lo > hi {
                return Err(Error::InvalidBounds {
                    lower: lower.clone(),
                    upper: upper.clone(),
                });
            }
        }

        if hi - lo <= 1 {
            warn!(?lower, ?upper, "padded numeric keyspace exhausted, collection needs renumbering");
            return Err(Error::KeyspaceExhausted {
                lower: lower.cloned(),
                upper: upper.cloned(),
            });
        }

        // hi - lo >= 2 and lo >= -1, so the midpoint is in 0..capacity
        let mid = (lo + hi) / 2;
        self.key_for(mid as u64)
    }
}
