//! Convenience re-exports for common CacheHaus usage
//!
//! # Example
//!
//! ```rust
//! use cachehaus::prelude::*;
//!
//! // CacheStore, CacheConfig, CacheError and friends are now in scope
//! let config = CacheConfig::default();
//! assert_eq!(config.address(), "localhost:6379");
//! ```

// Core CacheHaus components
pub use crate::core::CacheHaus;
pub use crate::errors::CacheHausError;

// Re-export centralized config
pub use config::{AppConfig, CacheConfig, ConfigError};

// Re-export cache system
pub use cache_system::prelude::*;

// Common external dependencies
pub use anyhow;
pub use tokio;
