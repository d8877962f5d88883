//! Moka-backed expiring cache
//!
//! Every entry lives for the instance's TTL from the moment it is written.
//! Expired entries are never returned; moka drops them lazily. Each instance
//! also holds at most `max_entries` live entries, and moka evicts on its own
//! past that bound.

use std::{
    future::Future,
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use moka::future::Cache;
use tracing::debug;

use super::CacheStats;

/// Default entry lifetime (10 minutes)
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

/// Default bound on live entries per cache
pub const DEFAULT_MAX_ENTRIES: u64 = 10_000;

/// Configuration for one cache instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiringCacheConfig {
    /// Lifetime of every entry
    pub ttl: Duration,
    /// Maximum number of live entries; beyond it moka evicts entries
    pub max_entries: u64,
}

impl Default for ExpiringCacheConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

/// Keyed cache with a fixed time-to-live and fetch-on-miss lookups
///
/// Concurrent misses on the same key each run their own fetch; the last
/// insert wins. No lock is held while a fetch is in flight.
pub struct ExpiringCache<V> {
    name: &'static str,
    cache: Cache<String, V>,
    config: ExpiringCacheConfig,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<V> std::fmt::Debug for ExpiringCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpiringCache")
            .field("name", &self.name)
            .field("ttl", &self.config.ttl)
            .field("entries", &self.cache.entry_count())
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish()
    }
}

impl<V> ExpiringCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Create a cache; `name` only appears in logs and stats
    #[must_use]
    pub fn new(name: &'static str, config: ExpiringCacheConfig) -> Self {
        let cache = Cache::builder()
            .name(name)
            .max_capacity(config.max_entries)
            .time_to_live(config.ttl)
            .build();

        Self {
            name,
            cache,
            config,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Create a cache with the default TTL and size bound
    #[cfg(test)]
    #[must_use]
    pub fn with_defaults(name: &'static str) -> Self {
        Self::new(name, ExpiringCacheConfig::default())
    }

    /// Entry lifetime
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.config.ttl
    }

    /// Cached value for `key`, or the result of `fetch`
    ///
    /// On a miss the fetched value is stored before it is returned. A failed
    /// fetch leaves the cache untouched and its error is returned unchanged.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: &str, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.cache.get(key).await {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(cache = self.name, %key, "Cache hit");
            return Ok(value);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!(cache = self.name, %key, "Cache miss");

        let value = fetch().await?;
        self.cache.insert(key.to_string(), value.clone()).await;
        Ok(value)
    }

    /// Cached value without fetching
    #[cfg(test)]
    pub async fn get(&self, key: &str) -> Option<V> {
        self.cache.get(key).await
    }

    /// Store a value, replacing any previous one
    #[cfg(test)]
    pub async fn insert(&self, key: impl Into<String>, value: V) {
        self.cache.insert(key.into(), value).await;
    }

    /// Evict one entry
    pub async fn remove(&self, key: &str) {
        self.cache.invalidate(key).await;
        debug!(cache = self.name, %key, "Cache entry removed");
    }

    /// Evict every entry
    pub fn clear(&self) {
        self.cache.invalidate_all();
        debug!(cache = self.name, "Cache cleared");
    }

    /// Hit, miss and entry counters
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.entry_count(),
        }
    }
}
