//! Integration tests for the Redis cache store
//!
//! Tests that need a live server are `#[ignore]`d; run them with
//! `cargo test -- --ignored` and `CACHEHAUS_TEST_REDIS_HOST` set (plus the
//! optional `_PORT`, `_PASSWORD` and `_DB` variables). Connection failure
//! tests run everywhere. Wire behavior without a server is covered in
//! `wire_contract_test.rs`.

use cachehaus::general_utils::random_hash;
use cachehaus::prelude::*;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

fn live_config() -> CacheConfig {
    let host = std::env::var("CACHEHAUS_TEST_REDIS_HOST")
        .expect("CACHEHAUS_TEST_REDIS_HOST must be set for live Redis tests");
    let port = std::env::var("CACHEHAUS_TEST_REDIS_PORT")
        .ok()
        .map(|p| p.parse().expect("CACHEHAUS_TEST_REDIS_PORT must be a port number"))
        .unwrap_or(6379);
    let password = std::env::var("CACHEHAUS_TEST_REDIS_PASSWORD").unwrap_or_default();
    let database = std::env::var("CACHEHAUS_TEST_REDIS_DB")
        .ok()
        .map(|db| db.parse().expect("CACHEHAUS_TEST_REDIS_DB must be a database index"))
        .unwrap_or(0);

    CacheConfig::new(host, port, password, database)
}

async fn setup_store() -> CacheStore {
    CacheStore::connect(live_config())
        .await
        .expect("Failed to connect to Redis")
}

fn unique_key(name: &str) -> String {
    format!("cachehaus-test:{}:{}", name, random_hash(6))
}

#[tokio::test]
async fn test_unreachable_host_fails_with_connection_error() {
    let config = CacheConfig::new("127.0.0.1".to_string(), 1, String::new(), 0)
        .with_connection_timeout(1000);

    let err = CacheStore::connect(config).await.unwrap_err();
    assert!(err.is_connection(), "unexpected error: {:?}", err);
    assert!(matches!(err, CacheError::Connection { .. }));
}

#[tokio::test]
async fn test_blackholed_host_does_not_hang() {
    // TEST-NET-1, never routed
    let config = CacheConfig::new("192.0.2.1".to_string(), 6379, String::new(), 0)
        .with_connection_timeout(200);

    let started = std::time::Instant::now();
    let err = CacheStore::connect(config).await.unwrap_err();

    assert!(matches!(err, CacheError::Connection { .. }));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_invalid_config_fails_fast() {
    let config = CacheConfig::new(String::new(), 6379, String::new(), 0);
    let err = CacheStore::connect(config).await.unwrap_err();
    assert!(matches!(err, CacheError::InvalidConfig(_)));
}

#[tokio::test]
async fn test_cachehaus_rejects_invalid_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[cache]\nhost = \"localhost\"\nport = 0").unwrap();

    let err = CacheHaus::from_file(file.path()).await.unwrap_err();
    assert!(matches!(err, CacheHausError::Config(ConfigError::Invalid(_))));
}

#[tokio::test]
async fn test_cachehaus_rejects_invalid_cache_settings_once() {
    let config = AppConfig {
        cache: CacheConfig::new("localhost".to_string(), 6379, String::new(), 0)
            .with_response_timeout(0),
    };

    let err = CacheHaus::new(config).await.unwrap_err();
    assert!(matches!(
        err,
        CacheHausError::Cache(CacheError::InvalidConfig(ConfigError::Invalid(_)))
    ));
}

#[tokio::test]
#[ignore = "requires a running Redis, see module docs"]
async fn test_set_get_round_trip() {
    let store = setup_store().await;
    let key = unique_key("round_trip");

    store.set(&key, "hello world", Duration::ZERO).await.unwrap();
    assert_eq!(store.get(&key).await.unwrap(), "hello world");

    // Values come back verbatim, including empty and non-ASCII ones
    store.set(&key, "", Duration::ZERO).await.unwrap();
    assert_eq!(store.get(&key).await.unwrap(), "");

    store.set(&key, "çava ✓ {\"json\": true}", Duration::ZERO).await.unwrap();
    assert_eq!(store.get(&key).await.unwrap(), "çava ✓ {\"json\": true}");

    store.delete(&key).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running Redis, see module docs"]
async fn test_set_overwrites_previous_value() {
    let store = setup_store().await;
    let key = unique_key("overwrite");

    store.set(&key, "first", Duration::ZERO).await.unwrap();
    store.set(&key, "second", Duration::from_secs(30)).await.unwrap();
    assert_eq!(store.get(&key).await.unwrap(), "second");

    store.delete(&key).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running Redis, see module docs"]
async fn test_ttl_expiration() {
    let store = setup_store().await;
    let key = unique_key("ttl");

    store.set(&key, "short-lived", Duration::from_millis(300)).await.unwrap();
    assert_eq!(store.get(&key).await.unwrap(), "short-lived");

    tokio::time::sleep(Duration::from_millis(800)).await;

    let err = store.get(&key).await.unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {:?}", err);
    assert!(!store.exists(&key).await.unwrap());
}

#[tokio::test]
#[ignore = "requires a running Redis, see module docs"]
async fn test_missing_key_is_not_found() {
    let store = setup_store().await;
    let key = unique_key("never_written");

    match store.get(&key).await {
        Err(CacheError::NotFound(missing)) => assert_eq!(missing, key),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
#[ignore = "requires a running Redis, see module docs"]
async fn test_exists() {
    let store = setup_store().await;
    let key = unique_key("exists");

    assert!(!store.exists(&key).await.unwrap());
    store.set(&key, "v", Duration::ZERO).await.unwrap();
    assert!(store.exists(&key).await.unwrap());

    store.delete(&key).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running Redis, see module docs"]
async fn test_delete_is_idempotent() {
    let store = setup_store().await;
    let key = unique_key("delete");

    store.delete(&key).await.unwrap();

    store.set(&key, "v", Duration::ZERO).await.unwrap();
    store.delete(&key).await.unwrap();
    assert!(!store.exists(&key).await.unwrap());

    store.delete(&key).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running Redis, see module docs"]
async fn test_session_scenario() {
    let mut store = setup_store().await;
    let key = unique_key("session:42");

    store.set(&key, "abc123", Duration::from_secs(5)).await.unwrap();
    assert_eq!(store.get(&key).await.unwrap(), "abc123");
    assert!(store.exists(&key).await.unwrap());
    store.delete(&key).await.unwrap();
    assert!(store.get(&key).await.unwrap_err().is_not_found());

    store.ping().await.unwrap();
    store.close().await;
    assert!(store.is_closed());
    assert!(matches!(store.get(&key).await, Err(CacheError::Closed)));
}

#[tokio::test]
#[ignore = "requires a running Redis, see module docs"]
async fn test_concurrent_use_through_shared_store() {
    let store = Arc::new(setup_store().await);
    let prefix = unique_key("concurrent");

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = Arc::clone(&store);
        let key = format!("{}:{}", prefix, i);
        handles.push(tokio::spawn(async move {
            store.set(&key, &i.to_string(), Duration::from_secs(30)).await.unwrap();
            let value = store.get(&key).await.unwrap();
            store.delete(&key).await.unwrap();
            value
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.await.unwrap(), i.to_string());
    }
}
