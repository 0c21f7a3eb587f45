//! Memoized remote reads and the `{ data, is_loading, error }` triad views
//! consume.

use std::future::Future;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::{Mutex, PoisonError};

use crate::cache::{MemoCache, UnboundedCache};
use crate::error::ClientError;

/// Deduplicates reads of the same resource through a [`MemoCache`].
///
/// The lock is never held across the fetch, so concurrent misses for one key
/// may both fetch; the later result overwrites the earlier one.
pub struct Memoized<K, V, C = UnboundedCache<K, V>> {
    cache: Mutex<C>,
    _entry: PhantomData<fn(K) -> V>,
}

impl<K, V> Default for Memoized<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new(UnboundedCache::default())
    }
}

impl<K, V, C> Memoized<K, V, C>
where
    C: MemoCache<K, V>,
    V: Clone,
{
    pub fn new(cache: C) -> Self {
        Self {
            cache: Mutex::new(cache),
            _entry: PhantomData,
        }
    }

    /// Cached value for `key` without fetching.
    pub fn cached(&self, key: &K) -> Option<V> {
        self.lock().get(key)
    }

    /// Return the cached value for `key`, or run `fetch` and remember its
    /// result. Errors are returned to the caller and never cached.
    pub async fn fetch<F, Fut, E>(&self, key: K, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.cached(&key) {
            return Ok(value);
        }
        let value = fetch().await?;
        self.lock().set(key, value.clone());
        Ok(value)
    }

    pub fn invalidate(&self, key: &K) {
        self.lock().remove(key);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run `f` with exclusive access to the underlying cache.
    pub fn with_cache<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        let mut cache = self.lock();
        f(&mut *cache)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, C> {
        // Cache writes are single statements; a poisoned lock holds
        // consistent data.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// State of one remote resource as seen by a view.
#[derive(Debug)]
pub struct Resource<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<ClientError>,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self::loading()
    }
}

impl<T> Resource<T> {
    /// Request in flight, nothing to show yet.
    pub fn loading() -> Self {
        Self {
            data: None,
            is_loading: true,
            error: None,
        }
    }

    pub fn ready(data: T) -> Self {
        Self {
            data: Some(data),
            is_loading: false,
            error: None,
        }
    }

    pub fn failed(error: ClientError) -> Self {
        Self {
            data: None,
            is_loading: false,
            error: Some(error),
        }
    }

    /// Await `request` and capture its outcome.
    pub async fn resolve<Fut>(request: Fut) -> Self
    where
        Fut: Future<Output = Result<T, ClientError>>,
    {
        request.await.into()
    }

    /// The data, or `None` after logging the error.
    ///
    /// For sections that are simply left out when their data is unavailable.
    pub fn into_data_or_log(self, what: &str) -> Option<T> {
        if let Some(error) = &self.error {
            tracing::warn!(resource = what, %error, "omitting section");
        }
        self.data
    }
}

impl<T> From<Result<T, ClientError>> for Resource<T> {
    fn from(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(data) => Self::ready(data),
            Err(error) => Self::failed(error),
        }
    }
}
