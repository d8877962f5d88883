//! Cache implementations
//!
//! `ExpiringCache` is the keyed, time-to-live store placed in front of every
//! provider call by the [`ProviderProxy`](crate::adapters::ProviderProxy).

mod expiring_cache;

pub use expiring_cache::{ExpiringCache, ExpiringCacheConfig};
use serde::Serialize;

/// Build a cache key as `prefix:part1|part2|...`
///
/// Parts are joined verbatim, so at most one part may be free text (a city
/// name or a search query). All other parts must never contain `|`:
/// coordinates and travel modes qualify. Two free-text parts in one key
/// could collide.
#[must_use]
pub fn cache_key(prefix: &str, parts: &[&str]) -> String {
    format!("{prefix}:{}", parts.join("|"))
}

/// Counters of one cache instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that went to the provider
    pub misses: u64,
    /// Approximate live entries
    pub entries: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_key_is_deterministic() {
        assert_eq!(
            cache_key("route", &["1|2", "3|4", "cycling"]),
            cache_key("route", &["1|2", "3|4", "cycling"])
        );
    }

    #[test]
    fn cache_key_format() {
        assert_eq!(cache_key("stations", &["lyon"]), "stations:lyon");
        assert_eq!(cache_key("route", &["a", "b", "walking"]), "route:a|b|walking");
    }

    #[test]
    fn cache_key_differs_by_prefix_and_parts() {
        assert_ne!(cache_key("reverse", &["x"]), cache_key("search", &["x"]));
        assert_ne!(cache_key("route", &["a", "b"]), cache_key("route", &["b", "a"]));
    }

    #[test]
    fn separator_inside_a_part_is_not_escaped() {
        // Joined verbatim, no escaping
        assert_eq!(cache_key("search", &["a|b"]), cache_key("search", &["a", "b"]));
        assert_ne!(cache_key("search", &["a|b"]), cache_key("stations", &["a|b"]));
    }
}
