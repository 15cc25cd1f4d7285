//! Cache Port (Driven Port)
//!
//! Interface for memoizing reference-data responses.

use std::time::Duration;

use serde_json::Value;

/// Port for a key/value cache with per-entry lifetime.
pub trait CachePort: Send + Sync {
    /// Cached value; `None` when absent or expired.
    fn get(&self, key: &str) -> Option<Value>;

    /// Store `value` under `key` for `ttl`.
    fn put(&self, key: &str, value: Value, ttl: Duration);

    /// Drop one entry.
    fn forget(&self, key: &str);

    /// Drop every entry.
    fn flush(&self);
}

/// Cache that stores nothing, used when caching is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCache;

impl CachePort for NoOpCache {
    fn get(&self, _key: &str) -> Option<Value> {
        None
    }

    fn put(&self, _key: &str, _value: Value, _ttl: Duration) {}

    fn forget(&self, _key: &str) {}

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn no_op_cache_never_hits() {
        let cache = NoOpCache;
        cache.put("carriers", json!([1]), Duration::from_secs(60));
        assert!(cache.get("carriers").is_none());
    }
}
