//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with insertion-order tracking
//! for FIFO eviction.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::cache::{CacheStats, InsertionOrder};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Bounded Cache ==
/// Bounded key/value storage with FIFO eviction.
///
/// Holds at most `capacity` entries. Inserting a new key into a full cache
/// evicts exactly one entry: the oldest surviving insertion. Overwriting an
/// existing key or reading a value never changes eviction order; lifetime is
/// decided purely by insertion sequence.
///
/// The map and the order queue are only ever mutated together inside a
/// public operation, so they cannot desynchronize.
#[derive(Debug)]
pub struct BoundedCache<K, V> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// Insertion-order tracker
    order: InsertionOrder<K>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K, V> BoundedCache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates a new BoundedCache with the specified capacity.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries the cache can hold, at least 1
    ///
    /// # Errors
    /// Returns `CacheError::InvalidCapacity` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        Ok(Self {
            entries: HashMap::with_capacity(capacity),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            capacity,
        })
    }

    // == From Config ==
    /// Creates a new BoundedCache from configuration.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Self::new(config.capacity)
    }

    // == Set ==
    /// Stores a key-value pair.
    ///
    /// If the key already exists, the value is overwritten in place and the
    /// key keeps its original insertion-order position. If the key is new
    /// and the cache is full, the oldest inserted entry is evicted first.
    pub fn set(&mut self, key: K, value: V) {
        // Overwrite case: replace the value, leave eviction order untouched
        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = value;
            trace!("overwrote existing entry in place");
            return;
        }

        // New key into a full cache: evict the oldest surviving entry first.
        // pop_oldest cannot return None here since capacity >= 1 implies the
        // order queue is non-empty whenever the cache is full.
        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_oldest() {
                self.entries.remove(&oldest);
                self.stats.record_eviction();
                debug!(
                    len = self.entries.len(),
                    capacity = self.capacity,
                    "evicted oldest entry to make room"
                );
            }
        }

        self.order.record(key.clone());
        self.entries.insert(key, value);
        self.stats.set_total_entries(self.entries.len());
        trace!(len = self.entries.len(), "inserted new entry");
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `None` if the key is absent; absence is a normal outcome,
    /// not an error. Lookups never change eviction order: this is a FIFO
    /// cache, so reading an entry does not extend its lifetime.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if self.entries.contains_key(key) {
            self.stats.record_hit();
            self.entries.get(key)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Has ==
    /// Checks whether a key is currently present.
    ///
    /// No side effects: neither eviction order nor statistics are touched.
    pub fn has(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// Returns whether an entry was removed. An explicit delete is not an
    /// eviction: it does not touch the eviction counter, but it does free a
    /// slot, so a following `set` can insert without evicting.
    pub fn delete(&mut self, key: &K) -> bool {
        if self.entries.remove(key).is_some() {
            self.order.remove(key);
            self.stats.set_total_entries(self.entries.len());
            trace!(len = self.entries.len(), "deleted entry");
            true
        } else {
            false
        }
    }

    // == Clear ==
    /// Removes all entries and resets insertion-order bookkeeping.
    ///
    /// Capacity is unchanged.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.stats.set_total_entries(0);
        debug!("cleared all entries");
    }

    // == Keys ==
    /// Iterates over present keys in insertion order, oldest first.
    ///
    /// The iterator borrows the cache; call `keys()` again to restart.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    // == Peek Oldest ==
    /// Returns the next eviction candidate without removing it.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.order.peek_oldest()
    }

    // == Stats ==
    /// Returns a snapshot of current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Capacity ==
    /// Returns the fixed capacity set at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
