//! Connection configuration types for the ticket marketplace client.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeouts, retries).
//! - Define query cache and display settings.
//! - Define the main `Config` structure combining them with auth.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - Default values are provided via `Default` impls, not magic numbers.
//! - `Config::default()` targets a local development backend anonymously.

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CACHE_SIZE, DEFAULT_CACHE_TTL_SECS, DEFAULT_MAX_RETRIES,
    DEFAULT_TIMEOUT_SECS,
};
use crate::types::auth::AuthConfig;
use crate::types::theme::ThemeFlag;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the marketplace backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the backend API (e.g., https://api.example.com)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    #[serde(default)]
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Retries for requests that have no query-specific retry policy
    #[serde(default)]
    pub max_retries: usize,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Query cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether query results are cached and deduplicated at all.
    pub enabled: bool,
    /// Freshness window for cached query results (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub ttl: Duration,
    /// Maximum number of cached query results.
    pub capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            capacity: DEFAULT_CACHE_SIZE,
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Dark/light mode flag.
    #[serde(default)]
    pub theme: ThemeFlag,
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    #[serde(default)]
    pub auth: AuthConfig,
    /// Query cache settings
    #[serde(default)]
    pub cache: CacheConfig,
    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Create a new anonymous config targeting the given base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            ..Self::default()
        }
    }

    /// Create a new config with the specified base URL and bearer token.
    pub fn with_api_token(base_url: String, token: SecretString) -> Self {
        Self {
            auth: AuthConfig::with_token(token),
            ..Self::with_base_url(base_url)
        }
    }
}
