//! Response cache settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cache for reference data (categories, carriers, locations).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether responses are cached at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Lifetime of a cached entry in seconds.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl CacheConfig {
    /// Entry lifetime.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_secs: default_ttl_secs(),
        }
    }
}

pub(super) const fn default_true() -> bool {
    true
}

const fn default_ttl_secs() -> u64 {
    3600
}
