//! Cache store implementation
//!
//! This module provides the CacheStore struct: a thin string key-value
//! accessor over a single Redis connection.

use crate::errors::CacheError;
use config::CacheConfig;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client, ConnectionInfo, IntoConnectionInfo, RedisError, RedisResult};
use std::fmt::Debug;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::time;

/// Redis-backed string cache
///
/// Each operation is one request/response round trip, bounded by the
/// configured response timeout. Failures are returned immediately; the store
/// never retries.
///
/// Data operations take `&self` and share one multiplexed connection, which
/// pipelines concurrent requests without any locking on our side. Requests
/// issued concurrently have no ordering guarantee. Wrap the store in an `Arc`
/// to share it between tasks.
///
/// Once [`CacheStore::close`] has run, every data operation fails with
/// [`CacheError::Closed`] without touching the network.
pub struct CacheStore {
    config: CacheConfig,
    connection: Option<MultiplexedConnection>,
}

impl Debug for CacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let connection_status = if self.connection.is_some() {
            "connected"
        } else {
            "closed"
        };

        f.debug_struct("CacheStore")
            .field("config", &self.config)
            .field("connection", &connection_status)
            .finish()
    }
}

impl CacheStore {
    /// Connect to Redis and verify the connection with a `PING`
    ///
    /// Invalid configuration is rejected before any network I/O. Connecting
    /// and the liveness check together are bounded by the connection timeout.
    pub async fn connect(config: CacheConfig) -> Result<Self, CacheError> {
        config.validate()?;

        let addr = config.address();
        let connection_failed = |source: RedisError| CacheError::Connection {
            addr: addr.clone(),
            source,
        };

        let client = Client::open(connection_info(&config).map_err(&connection_failed)?)
            .map_err(&connection_failed)?;

        let connection = bounded(config.connection_timeout(), async {
            let mut connection = client.get_multiplexed_async_connection().await?;
            liveness_check(&mut connection).await?;
            Ok::<_, RedisError>(connection)
        })
        .await
        .map_err(&connection_failed)?;

        crate::debug_log!(
            "Connected to Redis at {} (db {})",
            config.address(),
            config.database
        );

        Ok(Self {
            config,
            connection: Some(connection),
        })
    }

    /// Store `value` under `key`, replacing any previous value
    ///
    /// A zero `ttl` stores the value without expiration. A positive `ttl` is
    /// applied with millisecond precision and never rounds down to zero.
    pub async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.connection()?;

        let outcome: RedisResult<()> = if ttl.is_zero() {
            self.request(conn.set(key, value)).await
        } else {
            self.request(conn.pset_ex(key, value, ttl_millis(ttl)))
                .await
        };

        crate::trace_log!("SET {} (ttl {:?}) -> ok: {}", key, ttl, outcome.is_ok());

        outcome.map_err(|source| CacheError::Write {
            key: key.to_string(),
            source,
        })
    }

    /// Fetch the value stored under `key`
    ///
    /// An absent key is [`CacheError::NotFound`]; a transport failure is
    /// [`CacheError::Read`].
    pub async fn get(&self, key: &str) -> Result<String, CacheError> {
        self.lookup(key)
            .await?
            .ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    /// Check whether `key` currently holds a value
    ///
    /// Performs the same lookup as [`CacheStore::get`], reporting absence as
    /// `false` instead of an error.
    pub async fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.lookup(key).await?.is_some())
    }

    /// Remove `key`. Removing an absent key succeeds.
    pub async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.connection()?;

        let _removed: i64 = self
            .request(conn.del(key))
            .await
            .map_err(|source| CacheError::Write {
                key: key.to_string(),
                source,
            })?;

        crate::trace_log!("DEL {} -> removed {}", key, _removed);
        Ok(())
    }

    /// Ping Redis to check the connection is still usable
    pub async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.connection()?;

        bounded(self.config.response_timeout(), liveness_check(&mut conn))
            .await
            .map_err(|source| CacheError::Connection {
                addr: self.config.address(),
                source,
            })
    }

    /// Release the connection
    ///
    /// Best effort: a failure while saying goodbye to the server is logged and
    /// swallowed. Closing an already closed store does nothing.
    pub async fn close(&mut self) {
        let Some(mut conn) = self.connection.take() else {
            crate::debug_log!("Close called on an already closed cache store");
            return;
        };

        let outcome: RedisResult<()> = self
            .request(redis::cmd("QUIT").query_async(&mut conn))
            .await;

        match outcome {
            Ok(()) => {
                crate::debug_log!("Closed Redis connection to {}", self.config.address());
            }
            Err(err) => {
                tracing::warn!(
                    addr = %self.config.address(),
                    error = %err,
                    "Failed to close Redis connection cleanly"
                );
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.connection.is_none()
    }

    /// Get current configuration
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    fn connection(&self) -> Result<MultiplexedConnection, CacheError> {
        self.connection.clone().ok_or(CacheError::Closed)
    }

    async fn lookup(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.connection()?;

        let value: Option<String> =
            self.request(conn.get(key))
                .await
                .map_err(|source| CacheError::Read {
                    key: key.to_string(),
                    source,
                })?;

        crate::trace_log!("GET {} -> hit: {}", key, value.is_some());
        Ok(value)
    }

    async fn request<T, F>(&self, request: F) -> RedisResult<T>
    where
        F: Future<Output = RedisResult<T>>,
    {
        bounded(self.config.response_timeout(), request).await
    }
}

/// Translate the configuration into Redis connection parameters
fn connection_info(config: &CacheConfig) -> RedisResult<ConnectionInfo> {
    let mut info = (config.host.as_str(), config.port).into_connection_info()?;
    info.redis.db = i64::from(config.database);
    if !config.password.is_empty() {
        info.redis.password = Some(config.password.clone());
    }
    Ok(info)
}

async fn liveness_check(conn: &mut MultiplexedConnection) -> RedisResult<()> {
    let pong: String = redis::cmd("PING").query_async(conn).await?;
    if pong == "PONG" {
        Ok(())
    } else {
        Err(RedisError::from((
            redis::ErrorKind::ResponseError,
            "Unexpected PING reply",
            pong,
        )))
    }
}

/// Run a Redis request, failing with an I/O timeout once `limit` has passed
async fn bounded<T, F>(limit: Duration, request: F) -> RedisResult<T>
where
    F: Future<Output = RedisResult<T>>,
{
    match time::timeout(limit, request).await {
        Ok(outcome) => outcome,
        Err(_) => Err(RedisError::from(io::Error::new(
            io::ErrorKind::TimedOut,
            format!("No response from Redis within {:?}", limit),
        ))),
    }
}

fn ttl_millis(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1)
}
