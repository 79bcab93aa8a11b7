//! Error types for cache operations
//!
//! This module defines all error types that can occur
//! during cache operations and Redis interactions.

use thiserror::Error;

/// Cache system errors
///
/// A cache miss is reported as [`CacheError::NotFound`] and never as a
/// transport failure, so callers can tell "not cached" apart from "cache
/// unavailable". Transport failures keep the underlying Redis error as their
/// source.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Invalid cache configuration: {0}")]
    InvalidConfig(#[from] config::ConfigError),

    #[error("Redis connection error ({addr}): {source}")]
    Connection {
        addr: String,
        #[source]
        source: redis::RedisError,
    },

    #[error("Key not found: {0}")]
    NotFound(String),

    #[error("Cache read failed for key '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: redis::RedisError,
    },

    #[error("Cache write failed for key '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: redis::RedisError,
    },

    #[error("Cache store is closed")]
    Closed,
}

impl CacheError {
    /// Returns `true` for a cache miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CacheError::NotFound(_))
    }

    /// Returns `true` if the store could not be built or reached.
    pub fn is_connection(&self) -> bool {
        matches!(
            self,
            CacheError::Connection { .. } | CacheError::InvalidConfig(_)
        )
    }

    /// Returns `true` if the failure came from a request that ran out of time.
    pub fn is_timeout(&self) -> bool {
        match self {
            CacheError::Connection { source, .. }
            | CacheError::Read { source, .. }
            | CacheError::Write { source, .. } => source.is_timeout(),
            _ => false,
        }
    }
}
