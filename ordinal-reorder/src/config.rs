//! Reorder configuration.

use ordinal_keys::KeyspaceConfig;
use ordinal_types::Result;
use serde::{Deserialize, Serialize};

/// Per-collection reorder settings.
///
/// ```json
/// { "keyspace": { "kind": "padded_numeric", "width": 12 }, "verify_snapshot": true }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReorderConfig {
    /// Keyspace the collection's keys are drawn from. Fixed for the
    /// collection's lifetime.
    pub keyspace: KeyspaceConfig,
    /// Reject snapshots that are not strictly ascending by sort key before
    /// resolving anything.
    pub verify_snapshot: bool,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            keyspace: KeyspaceConfig::default(),
            verify_snapshot: true,
        }
    }
}

impl ReorderConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
