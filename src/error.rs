//! Error types for the bounded cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the bounded cache.
///
/// Construction is the only fallible operation: `get`, `has` and `delete`
/// report absence through their return values rather than erroring.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity below the minimum of one entry
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),
}

// == Result Type Alias ==
/// Convenience Result type for the bounded cache.
pub type Result<T> = std::result::Result<T, CacheError>;
