//! Cache Module
//!
//! Provides bounded in-memory key/value storage with FIFO eviction.

mod order;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use order::InsertionOrder;
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::BoundedCache;
