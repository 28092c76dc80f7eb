//! Shared Cache Module
//!
//! Thread-safe wrapper around [`BoundedCache`] for concurrent use.

use std::hash::Hash;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::{BoundedCache, CacheStats};
use crate::config::CacheConfig;
use crate::error::Result;

// == Shared Cache ==
/// Thread-safe handle to a [`BoundedCache`].
///
/// The core cache defines no internal locking, so concurrent callers go
/// through this wrapper instead: a single `RwLock` guards every operation,
/// making each one appear atomic. Cloning the handle is cheap and shares
/// the same underlying cache.
///
/// A write lock is taken even for `get`, because lookups update hit/miss
/// statistics inside the core cache.
#[derive(Debug)]
pub struct SharedCache<K, V> {
    /// The guarded cache
    inner: Arc<RwLock<BoundedCache<K, V>>>,
}

// Cloning shares the underlying cache, so no bounds on K or V are needed.
impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> SharedCache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates a new SharedCache with the specified capacity.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidCapacity` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self::from_cache(BoundedCache::new(capacity)?))
    }

    // == From Config ==
    /// Creates a new SharedCache from configuration.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Ok(Self::from_cache(BoundedCache::from_config(config)?))
    }

    // == From Cache ==
    /// Wraps an existing cache in a shared handle.
    pub fn from_cache(cache: BoundedCache<K, V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cache)),
        }
    }

    // == Set ==
    /// Stores a key-value pair, evicting the oldest entry if full.
    pub async fn set(&self, key: K, value: V) {
        let mut cache = self.inner.write().await;
        cache.set(key, value);
    }

    // == Get ==
    /// Retrieves a clone of the value for a key, or `None` if absent.
    pub async fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let mut cache = self.inner.write().await;
        cache.get(key).cloned()
    }

    // == Has ==
    /// Checks whether a key is currently present.
    pub async fn has(&self, key: &K) -> bool {
        let cache = self.inner.read().await;
        cache.has(key)
    }

    // == Delete ==
    /// Removes an entry by key, returning whether one was removed.
    pub async fn delete(&self, key: &K) -> bool {
        let mut cache = self.inner.write().await;
        cache.delete(key)
    }

    // == Clear ==
    /// Removes all entries.
    pub async fn clear(&self) {
        let mut cache = self.inner.write().await;
        cache.clear();
    }

    // == Keys ==
    /// Returns all present keys in insertion order, oldest first.
    pub async fn keys(&self) -> Vec<K> {
        let cache = self.inner.read().await;
        cache.keys().cloned().collect()
    }

    // == Stats ==
    /// Returns a snapshot of current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let cache = self.inner.read().await;
        cache.stats()
    }

    // == Capacity ==
    /// Returns the fixed capacity set at construction.
    pub async fn capacity(&self) -> usize {
        let cache = self.inner.read().await;
        cache.capacity()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        let cache = self.inner.read().await;
        cache.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub async fn is_empty(&self) -> bool {
        let cache = self.inner.read().await;
        cache.is_empty()
    }
}
