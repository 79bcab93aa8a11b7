//! # Configuration Management for CacheHaus
//!
//! This crate provides the configuration structures used to reach the Redis
//! backend, together with the loaders that fill them from TOML files, `.env`
//! files and environment variables.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::CacheConfig;
//!
//! let cache_config = CacheConfig::new("localhost".to_string(), 6379, String::new(), 0)
//!     .with_connection_timeout(1500)
//!     .with_response_timeout(2000);
//! assert_eq!(cache_config.address(), "localhost:6379");
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [cache]
//! host = "localhost"
//! port = 6379
//! password = ""
//! database = 0
//! connection_timeout_ms = 3000
//! response_timeout_ms = 5000
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from cachehaus.toml
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, fmt, path::Path, time::Duration};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./cachehaus.toml";

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 6379;
const DEFAULT_CONNECTION_TIMEOUT_MS: u64 = 3000;
const DEFAULT_RESPONSE_TIMEOUT_MS: u64 = 5000;

pub const ENV_CONFIG_PATH: &str = "CACHEHAUS_CONFIG";
pub const ENV_REDIS_HOST: &str = "CACHEHAUS_REDIS_HOST";
pub const ENV_REDIS_PORT: &str = "CACHEHAUS_REDIS_PORT";
pub const ENV_REDIS_PASSWORD: &str = "CACHEHAUS_REDIS_PASSWORD";
pub const ENV_REDIS_DB: &str = "CACHEHAUS_REDIS_DB";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub cache: CacheConfig,
}

/// Connection settings for the Redis backend.
///
/// Handed to the cache store once at construction and never changed
/// afterwards. The `Debug` output redacts the password.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Empty means no authentication
    #[serde(default)]
    pub password: String,
    /// Logical database index selected after connecting
    #[serde(default)]
    pub database: u32,
    /// Upper bound for connecting plus the initial liveness check
    #[serde(default = "default_connection_timeout_ms")]
    pub connection_timeout_ms: u64,
    /// Upper bound for a single request/response round trip
    #[serde(default = "default_response_timeout_ms")]
    pub response_timeout_ms: u64,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_connection_timeout_ms() -> u64 {
    DEFAULT_CONNECTION_TIMEOUT_MS
}

fn default_response_timeout_ms() -> u64 {
    DEFAULT_RESPONSE_TIMEOUT_MS
}

impl AppConfig {
    /// Load configuration from TOML file specified in .env or defaults
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is fine, the variables may come from the process
        let _ = dotenvy::dotenv();

        if let Ok(config_path) = env::var(ENV_CONFIG_PATH) {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Err(ConfigError::Invalid(format!(
                "Config path must be specified in .env file as {} or in {} file",
                ENV_CONFIG_PATH, DEFAULT_CONFIG_PATH
            )))
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cache.validate()
    }
}

impl CacheConfig {
    /// Create a new cache configuration with default timeouts
    pub fn new(host: String, port: u16, password: String, database: u32) -> Self {
        Self {
            host,
            port,
            password,
            database,
            connection_timeout_ms: DEFAULT_CONNECTION_TIMEOUT_MS,
            response_timeout_ms: DEFAULT_RESPONSE_TIMEOUT_MS,
        }
    }

    pub fn with_connection_timeout(mut self, timeout_ms: u64) -> Self {
        self.connection_timeout_ms = timeout_ms;
        self
    }

    pub fn with_response_timeout(mut self, timeout_ms: u64) -> Self {
        self.response_timeout_ms = timeout_ms;
        self
    }

    /// Build the configuration from `CACHEHAUS_REDIS_*` environment variables
    ///
    /// Unset variables fall back to defaults; set but unparseable values are
    /// rejected.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(ENV_REDIS_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup(ENV_REDIS_PORT) {
            Some(raw) => parse_var::<u16>(ENV_REDIS_PORT, &raw)?,
            None => DEFAULT_PORT,
        };
        let password = lookup(ENV_REDIS_PASSWORD).unwrap_or_default();
        let database = match lookup(ENV_REDIS_DB) {
            Some(raw) => parse_var::<u32>(ENV_REDIS_DB, &raw)?,
            None => 0,
        };

        let config = Self::new(host, port, password, database);
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "Cache host cannot be empty".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(ConfigError::Invalid(
                "Cache port cannot be zero".to_string(),
            ));
        }
        if self.connection_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "Cache connection_timeout_ms must be greater than 0".to_string(),
            ));
        }
        if self.response_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "Cache response_timeout_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// `host:port` as used for the TCP connection
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn connection_timeout(&self) -> Duration {
        Duration::from_millis(self.connection_timeout_ms)
    }

    pub fn response_timeout(&self) -> Duration {
        Duration::from_millis(self.response_timeout_ms)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST.to_string(), DEFAULT_PORT, String::new(), 0)
    }
}

impl fmt::Debug for CacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() { "" } else { "***" };
        f.debug_struct("CacheConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("password", &password)
            .field("database", &self.database)
            .field("connection_timeout_ms", &self.connection_timeout_ms)
            .field("response_timeout_ms", &self.response_timeout_ms)
            .finish()
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse::<T>().map_err(|_| {
        ConfigError::Invalid(format!("{} has an invalid value: {:?}", name, raw))
    })
}
