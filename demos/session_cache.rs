//! Session cache walkthrough
//!
//! Runs the set/get/exists/delete cycle against a local Redis.
//! Connection settings come from `CACHEHAUS_REDIS_*` variables (or `.env`).
//!
//! ```sh
//! RUST_LOG=debug cargo run --example session_cache --features debug-logging
//! ```

use cachehaus::general_utils::random_hash;
use cachehaus::prelude::*;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = CacheConfig::from_env()?;
    println!("Connecting to {}...", config.address());

    let mut store = CacheStore::connect(config).await?;

    let key = "session:42";
    let token = random_hash(12);

    store.set(key, &token, Duration::from_secs(5)).await?;
    println!("Stored {} = {}", key, token);

    let cached = store.get(key).await?;
    println!("Fetched {} = {}", key, cached);
    println!("Exists: {}", store.exists(key).await?);

    store.delete(key).await?;
    match store.get(key).await {
        Ok(value) => println!("Still cached?! {}", value),
        Err(err) if err.is_not_found() => println!("Deleted, cache miss as expected"),
        Err(err) => return Err(err.into()),
    }

    store.close().await;
    Ok(())
}
