//! Core CacheHaus functionality
//!
//! This module contains the CacheHaus struct, which turns application
//! configuration into a connected cache store.

use cache_system::CacheStore;
use config::AppConfig;
use std::path::Path;

use crate::errors::CacheHausError;

/// Entry point owning the application's cache store
#[derive(Debug)]
pub struct CacheHaus {
    store: CacheStore,
}

impl CacheHaus {
    /// Connect using an already loaded configuration
    ///
    /// The store validates the cache settings before opening a connection.
    pub async fn new(config: AppConfig) -> Result<Self, CacheHausError> {
        let store = CacheStore::connect(config.cache).await?;

        tracing::info!(
            addr = %store.config().address(),
            database = store.config().database,
            "Cache store connected"
        );

        Ok(Self { store })
    }

    /// Load configuration from `CACHEHAUS_CONFIG` or `./cachehaus.toml` and connect
    pub async fn load() -> Result<Self, CacheHausError> {
        Self::new(AppConfig::load()?).await
    }

    /// Load configuration from a TOML file and connect
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CacheHausError> {
        Self::new(AppConfig::from_file(path)?).await
    }

    /// Get the cache store
    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    /// Hand the store over to the caller
    pub fn into_store(self) -> CacheStore {
        self.store
    }

    /// Check cache connection health
    pub async fn health_check(&self) -> Result<(), CacheHausError> {
        self.store.ping().await?;
        Ok(())
    }

    /// Close the underlying connection. Never fails.
    pub async fn shutdown(mut self) {
        self.store.close().await;
        tracing::info!("Cache store closed");
    }
}
