//! In-memory TTL cache.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use serde_json::Value;

use crate::application::ports::CachePort;

#[derive(Debug, Clone)]
struct Entry {
    value: Value,
    /// `None` when the TTL reaches past what `Instant` can represent.
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }
}

/// Process-local implementation of `CachePort`.
///
/// Expired entries are evicted lazily on `get`, or in bulk by
/// [`InMemoryCache::purge_expired`].
#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl InMemoryCache {
    /// Create a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop every expired entry; returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        before - entries.len()
    }
}

impl CachePort for InMemoryCache {
    fn get(&self, key: &str) -> Option<Value> {
        let now = Instant::now();
        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => return None,
                Some(entry) if !entry.is_expired(now) => return Some(entry.value.clone()),
                Some(_) => {}
            }
        }

        let mut entries = self.entries.write();
        if entries.get(key).is_some_and(|entry| entry.is_expired(now)) {
            entries.remove(key);
            tracing::debug!(key, "Cache entry expired");
        }
        None
    }

    fn put(&self, key: &str, value: Value, ttl: Duration) {
        let entry = Entry {
            value,
            expires_at: Instant::now().checked_add(ttl),
        };
        self.entries.write().insert(key.to_string(), entry);
    }

    fn forget(&self, key: &str) {
        self.entries.write().remove(key);
    }

    fn flush(&self) {
        self.entries.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn put_then_get() {
        let cache = InMemoryCache::new();
        cache.put("a", json!({ "x": 1 }), Duration::from_secs(60));
        assert_eq!(cache.get("a"), Some(json!({ "x": 1 })));
        assert!(cache.get("b").is_none());
    }

    #[test]
    fn expired_entry_is_evicted_on_get() {
        let cache = InMemoryCache::new();
        cache.put("a", json!(1), Duration::ZERO);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("a").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn forget_and_flush() {
        let cache = InMemoryCache::new();
        cache.put("a", json!(1), Duration::from_secs(60));
        cache.put("b", json!(2), Duration::from_secs(60));
        cache.forget("a");
        assert!(cache.get("a").is_none());
        assert_eq!(cache.len(), 1);
        cache.flush();
        assert!(cache.is_empty());
    }

    #[test]
    fn purge_removes_only_expired() {
        let cache = InMemoryCache::new();
        cache.put("old", json!(1), Duration::ZERO);
        cache.put("new", json!(2), Duration::from_secs(60));
        assert_eq!(cache.purge_expired(), 1);
        assert_eq!(cache.get("new"), Some(json!(2)));
    }

    #[test]
    fn unbounded_ttl_never_expires() {
        let cache = InMemoryCache::new();
        cache.put("a", json!(1), Duration::from_secs(u64::MAX));
        assert_eq!(cache.get("a"), Some(json!(1)));
        assert_eq!(cache.purge_expired(), 0);
    }

    #[test]
    fn put_overwrites_and_extends() {
        let cache = InMemoryCache::new();
        cache.put("a", json!(1), Duration::ZERO);
        cache.put("a", json!(2), Duration::from_secs(60));
        assert_eq!(cache.get("a"), Some(json!(2)));
    }
}
