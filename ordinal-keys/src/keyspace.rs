//! Keyspace selection and configuration.

use crate::{Base64Keyspace, DEFAULT_WIDTH, PaddedNumericKeyspace, SortKeyProvider};
use ordinal_types::{Result, SortKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two keyspaces a collection can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyspaceKind {
    Base64,
    PaddedNumeric,
}

impl fmt::Display for KeyspaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Base64 => "base64",
            Self::PaddedNumeric => "padded_numeric",
        })
    }
}

/// Per-collection keyspace configuration.
///
/// JSON form: `{"kind": "base64", "jitter": true}` or
/// `{"kind": "padded_numeric", "width": 12}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KeyspaceConfig {
    Base64 {
        #[serde(default)]
        jitter: bool,
    },
    PaddedNumeric {
        #[serde(default = "default_width")]
        width: usize,
    },
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}

impl Default for KeyspaceConfig {
    fn default() -> Self {
        Self::Base64 { jitter: false }
    }
}

impl KeyspaceConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn kind(&self) -> KeyspaceKind {
        match self {
            Self::Base64 { .. } => KeyspaceKind::Base64,
            Self::PaddedNumeric { .. } => KeyspaceKind::PaddedNumeric,
        }
    }

    /// Validates the configuration and builds the provider.
    pub fn build(&self) -> Result<Keyspace> {
        Ok(match *self {
            Self::Base64 { jitter: false } => Keyspace::Base64(Base64Keyspace::new()),
            Self::Base64 { jitter: true } => Keyspace::Base64(Base64Keyspace::with_jitter()),
            Self::PaddedNumeric { width } => {
                Keyspace::PaddedNumeric(PaddedNumericKeyspace::new(width)?)
            }
        })
    }
}

/// A configured keyspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyspace {
    Base64(Base64Keyspace),
    PaddedNumeric(PaddedNumericKeyspace),
}

impl Default for Keyspace {
    fn default() -> Self {
        Self::Base64(Base64Keyspace::new())
    }
}

impl From<Base64Keyspace> for Keyspace {
    fn from(keyspace: Base64Keyspace) -> Self {
        Self::Base64(keyspace)
    }
}

impl From<PaddedNumericKeyspace> for Keyspace {
    fn from(keyspace: PaddedNumericKeyspace) -> Self {
        Self::PaddedNumeric(keyspace)
    }
}

impl TryFrom<KeyspaceConfig> for Keyspace {
    type Error = ordinal_types::Error;

    fn try_from(config: KeyspaceConfig) -> Result<Self> {
        config.build()
    }
}

impl SortKeyProvider for Keyspace {
    fn kind(&self) -> KeyspaceKind {
        match self {
            Self::Base64(ks) => ks.kind(),
            Self::PaddedNumeric(ks) => ks.kind(),
        }
    }

    fn validate_key(&self, key: &SortKey) -> Result<()> {
        match self {
            Self::Base64(ks) => ks.validate_key(key),
            Self::PaddedNumeric(ks) => ks.validate_key(key),
        }
    }

    fn key_between(&self, lower: Option<&SortKey>, upper: Option<&SortKey>) -> Result<SortKey> {
        match self {
            Self::Base64(ks) => ks.key_between(lower, upper),
            Self::PaddedNumeric(ks) => ks.key_between(lower, upper),
        }
    }
}
