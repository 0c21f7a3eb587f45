//! Request memoization caches.
//!
//! Adapters remember the results of remote reads keyed by request identity
//! so repeated renders do not refetch. Writes are last-writer-wins.

use std::collections::HashMap;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Key/value store behind a memoized request.
pub trait MemoCache<K, V> {
    /// Cached value for `key`, if present and fresh.
    fn get(&mut self, key: &K) -> Option<V>;
    fn set(&mut self, key: K, value: V);
    fn remove(&mut self, key: &K) -> Option<V>;
    fn clear(&mut self);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cache that keeps every entry for its own lifetime.
#[derive(Debug, Clone)]
pub struct UnboundedCache<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> Default for UnboundedCache<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V: Clone> MemoCache<K, V> for UnboundedCache<K, V> {
    fn get(&mut self, key: &K) -> Option<V> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key)
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Size-bounded LRU cache whose entries expire after a fixed time.
pub struct LruCache<K: Eq + Hash, V> {
    entries: lru::LruCache<K, (V, Instant)>,
    ttl: Duration,
}

impl<K: Eq + Hash, V> LruCache<K, V> {
    /// A zero `capacity` is treated as 1.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: lru::LruCache::new(capacity),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// [`MemoCache::get`] evaluated at `now`. Expired entries are dropped.
    pub fn get_at(&mut self, key: &K, now: Instant) -> Option<&V> {
        let expired = match self.entries.peek(key) {
            Some((_, expires_at)) => now >= *expires_at,
            None => return None,
        };
        if expired {
            self.entries.pop(key);
            return None;
        }
        self.entries.get(key).map(|(value, _)| value)
    }

    /// [`MemoCache::set`] with expiry counted from `now`.
    pub fn set_at(&mut self, key: K, value: V, now: Instant) {
        self.entries.put(key, (value, now + self.ttl));
    }

    fn insert_with_expiry(&mut self, key: K, value: V, expires_at: Instant) {
        self.entries.put(key, (value, expires_at));
    }

    /// Entries from least to most recently used, with their expiry.
    fn entries_oldest_first(&self) -> Vec<(&K, &V, Instant)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(key, (value, expires_at))| (key, value, *expires_at))
            .collect();
        entries.reverse();
        entries
    }
}

impl<K: Eq + Hash, V: Clone> MemoCache<K, V> for LruCache<K, V> {
    fn get(&mut self, key: &K) -> Option<V> {
        self.get_at(key, Instant::now()).cloned()
    }

    fn set(&mut self, key: K, value: V) {
        self.set_at(key, value, Instant::now());
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.pop(key).map(|(value, _)| value)
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// An [`LruCache`] mirrored to a JSON file so entries survive restarts.
///
/// The file holds `[key, value, expires_at_unix_ms]` triples, least
/// recently used first. Nothing is written until [`PersistentCache::save`].
pub struct PersistentCache<K: Eq + Hash, V> {
    path: PathBuf,
    cache: LruCache<K, V>,
}

impl<K, V> PersistentCache<K, V>
where
    K: Eq + Hash + Clone + Serialize + DeserializeOwned,
    V: Clone + Serialize + DeserializeOwned,
{
    /// Open the cache at `path`.
    ///
    /// A missing file yields an empty cache. An unreadable or corrupt file is
    /// logged and ignored; the next save overwrites it.
    pub fn open(path: impl Into<PathBuf>, capacity: usize, ttl: Duration) -> Self {
        let path = path.into();
        let mut cache = LruCache::new(capacity, ttl);
        match read_entries::<K, V>(&path) {
            Ok(entries) => {
                let now = Instant::now();
                let now_ms = chrono::Utc::now().timestamp_millis();
                let mut restored = 0usize;
                for (key, value, expires_ms) in entries {
                    let remaining = expires_ms.saturating_sub(now_ms);
                    if remaining <= 0 {
                        continue;
                    }
                    let expires_at = now + Duration::from_millis(remaining as u64);
                    cache.insert_with_expiry(key, value, expires_at);
                    restored += 1;
                }
                tracing::debug!(path = %path.display(), restored, "restored cache");
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to load cache");
            }
        }
        Self { path, cache }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write all fresh entries to disk.
    pub fn save(&self) -> Result<()> {
        let now = Instant::now();
        let now_ms = chrono::Utc::now().timestamp_millis();
        let entries: Vec<_> = self
            .cache
            .entries_oldest_first()
            .into_iter()
            .filter(|(_, _, expires_at)| *expires_at > now)
            .map(|(key, value, expires_at)| {
                let remaining = expires_at.saturating_duration_since(now).as_millis() as i64;
                (key, value, now_ms + remaining)
            })
            .collect();
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(&entries)?;
        std::fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), count = entries.len(), "saved cache");
        Ok(())
    }
}

fn read_entries<K, V>(path: &Path) -> Result<Vec<(K, V, i64)>>
where
    K: DeserializeOwned,
    V: DeserializeOwned,
{
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(serde_json::from_str(&contents)?),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(error) => Err(error.into()),
    }
}

impl<K, V> MemoCache<K, V> for PersistentCache<K, V>
where
    K: Eq + Hash + Clone + Serialize + DeserializeOwned,
    V: Clone + Serialize + DeserializeOwned,
{
    fn get(&mut self, key: &K) -> Option<V> {
        self.cache.get(key)
    }

    fn set(&mut self, key: K, value: V) {
        self.cache.set(key, value);
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.cache.remove(key)
    }

    fn clear(&mut self) {
        self.cache.clear();
    }

    fn len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_keeps_everything() {
        let mut cache = UnboundedCache::default();
        for i in 0..100 {
            cache.set(i, i * 2);
        }
        assert_eq!(cache.len(), 100);
        assert_eq!(cache.get(&50), Some(100));
        assert_eq!(cache.remove(&50), Some(100));
        assert_eq!(cache.get(&50), None);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn last_writer_wins() {
        let mut cache = UnboundedCache::default();
        cache.set("profile", 1);
        cache.set("profile", 2);
        assert_eq!(cache.get(&"profile"), Some(2));
    }

    #[test]
    fn lru_evicts_least_recently_used() {
        let mut cache = LruCache::new(2, Duration::from_secs(60));
        cache.set("a", 1);
        cache.set("b", 2);
        assert_eq!(cache.get(&"a"), Some(1));
        cache.set("c", 3);
        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.get(&"a"), Some(1));
        assert_eq!(cache.get(&"c"), Some(3));
    }

    #[test]
    fn lru_entries_expire() {
        let t0 = Instant::now();
        let mut cache = LruCache::new(10, Duration::from_secs(3600));
        cache.set_at("alice", "avatar.png", t0);
        assert_eq!(
            cache.get_at(&"alice", t0 + Duration::from_secs(3599)),
            Some(&"avatar.png")
        );
        assert_eq!(cache.get_at(&"alice", t0 + Duration::from_secs(3600)), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn zero_capacity_holds_one() {
        let mut cache = LruCache::new(0, Duration::from_secs(1));
        cache.set(1, 1);
        cache.set(2, 2);
        assert_eq!(cache.len(), 1);
    }
}
