//! Bounded Cache - A bounded in-memory key/value cache
//!
//! Provides generic key/value storage with a fixed capacity and
//! deterministic FIFO (insertion-order) eviction.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{BoundedCache, CacheStats, SharedCache};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
