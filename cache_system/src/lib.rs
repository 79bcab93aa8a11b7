//! Cache system for Redis-based caching
//!
//! This crate provides [`CacheStore`], a string key-value accessor over a
//! single Redis connection, together with its error taxonomy.
//!
//! ```rust,no_run
//! use cache_system::prelude::*;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<(), CacheError> {
//! let config = CacheConfig::new("localhost".to_string(), 6379, String::new(), 0);
//! let mut store = CacheStore::connect(config).await?;
//!
//! store.set("session:42", "abc123", Duration::from_secs(5)).await?;
//! match store.get("session:42").await {
//!     Ok(token) => println!("cached token: {}", token),
//!     Err(err) if err.is_not_found() => println!("cache miss"),
//!     Err(err) => return Err(err),
//! }
//!
//! store.close().await;
//! # Ok(())
//! # }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod prelude;
pub mod store;

// Re-export centralized config
pub use config::CacheConfig;

pub use errors::CacheError;
pub use store::CacheStore;
