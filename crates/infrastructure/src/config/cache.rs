//! Provider cache configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::default_true;
use crate::cache::ExpiringCacheConfig;

/// Cache settings shared by every provider cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether provider responses are cached
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Entry lifetime in seconds (default: 10 minutes)
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Maximum live entries per cache
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,
}

const fn default_ttl_secs() -> u64 {
    10 * 60
}

const fn default_max_entries() -> u64 {
    10_000
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_secs: default_ttl_secs(),
            max_entries: default_max_entries(),
        }
    }
}

impl CacheConfig {
    /// Settings for one [`ExpiringCache`](crate::cache::ExpiringCache)
    #[must_use]
    pub const fn expiring_cache_config(&self) -> ExpiringCacheConfig {
        ExpiringCacheConfig {
            ttl: Duration::from_secs(self.ttl_secs),
            max_entries: self.max_entries,
        }
    }
}
