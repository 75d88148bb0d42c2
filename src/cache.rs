//! Cache adapter handle.
//!
//! The resolver never reads or writes the cache; it hands the handle to the
//! adapter factory, which owns the caching protocol. [`AutoCache`] is a small
//! in-process LRU for callers that do not bring their own backend.

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use lru::LruCache;

/// Key/value cache used by adapters for transparent response caching.
pub trait CacheAdapter: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value. `ttl = None` keeps it until evicted.
    fn set(&self, key: &str, value: String, ttl: Option<Duration>);
}

/// Shared, type-erased cache handle.
pub type CacheHandle = Arc<dyn CacheAdapter>;

struct CacheEntry {
    value: String,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }
}

/// In-memory LRU cache with optional per-entry TTL.
pub struct AutoCache {
    entries: Mutex<LruCache<String, CacheEntry>>,
}

impl AutoCache {
    const DEFAULT_MAX_SIZE: usize = 128;

    /// Create a cache holding at most `max_size` entries (minimum 1).
    pub fn new(max_size: usize) -> Self {
        let cap = NonZeroUsize::new(max_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(cap)),
        }
    }

    /// Convenience constructor returning a [`CacheHandle`].
    pub fn handle(max_size: usize) -> CacheHandle {
        Arc::new(Self::new(max_size))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruCache<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for AutoCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_SIZE)
    }
}

impl CacheAdapter for AutoCache {
    fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.lock();
        if entries.peek(key).is_some_and(CacheEntry::is_expired) {
            entries.pop(key);
            return None;
        }
        entries.get(key).map(|entry| entry.value.clone())
    }

    fn set(&self, key: &str, value: String, ttl: Option<Duration>) {
        let entry = CacheEntry {
            value,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        };
        self.lock().put(key.to_string(), entry);
    }
}

impl fmt::Debug for AutoCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.lock();
        f.debug_struct("AutoCache")
            .field("len", &entries.len())
            .field("cap", &entries.cap())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_least_recently_used() {
        let cache = AutoCache::new(2);
        cache.set("a", "1".into(), None);
        cache.set("b", "2".into(), None);
        assert_eq!(cache.get("a").as_deref(), Some("1"));
        cache.set("c", "3".into(), None);

        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("a").as_deref(), Some("1"));
        assert_eq!(cache.get("c").as_deref(), Some("3"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn expired_entries_are_dropped() {
        let cache = AutoCache::default();
        cache.set("k", "v".into(), Some(Duration::ZERO));
        assert_eq!(cache.get("k"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let cache = AutoCache::new(0);
        cache.set("k", "v".into(), None);
        assert_eq!(cache.get("k").as_deref(), Some("v"));
    }
}
