//! # CacheHaus
//!
//! A thin Redis-backed string cache with a strict error contract: a cache miss
//! is never confused with a broken cache.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cachehaus::prelude::*;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CacheConfig::new("localhost".to_string(), 6379, String::new(), 0);
//!     let mut store = CacheStore::connect(config).await?;
//!
//!     store.set("session:42", "abc123", Duration::from_secs(5)).await?;
//!     assert_eq!(store.get("session:42").await?, "abc123");
//!     assert!(store.exists("session:42").await?);
//!
//!     store.delete("session:42").await?;
//!     match store.get("session:42").await {
//!         Err(err) if err.is_not_found() => println!("cache miss"),
//!         other => println!("unexpected: {:?}", other),
//!     }
//!
//!     store.close().await;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::CacheHaus;
pub use errors::CacheHausError;

// Re-export centralized config
pub use config::{AppConfig, CacheConfig, ConfigError};

// Re-export internal crates
pub use cache_system;
pub use cache_system::{debug_log, trace_log};
pub use config;
pub use general_utils;
