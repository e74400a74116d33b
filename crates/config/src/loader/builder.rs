//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from `.env`, environment variables, and direct builder methods.
//! - Validate and build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables when applied after `from_env()`.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{MAX_CACHE_TTL_SECS, MAX_MAX_RETRIES, MAX_TIMEOUT_SECS};
use crate::types::{AuthConfig, CacheConfig, Config, ConnectionConfig, DisplayConfig, ThemeFlag};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    api_token: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    max_retries: Option<usize>,
    cache_enabled: Option<bool>,
    cache_ttl: Option<Duration>,
    cache_capacity: Option<u64>,
    dark_mode: Option<bool>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax or
    /// cannot be read. Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            tracing::debug!("DOTENV_DISABLED set, skipping .env");
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                tracing::warn!(error_index = idx, "Malformed .env file");
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from `TICKET_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the backend base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the bearer token.
    pub fn with_api_token(mut self, token: String) -> Self {
        self.api_token = Some(SecretString::new(token.into()));
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the default retry count.
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Enable or disable the query cache.
    pub fn with_cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = Some(enabled);
        self
    }

    /// Set the query cache freshness window.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    /// Set the dark/light flag.
    pub fn with_dark_mode(mut self, dark: bool) -> Self {
        self.dark_mode = Some(dark);
        self
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL is missing or does not parse, or
    /// when a numeric setting is out of bounds.
    pub fn build(self) -> Result<Config, ConfigError> {
        let defaults = Config::default();

        let base_url = self.base_url.ok_or(ConfigError::MissingBaseUrl)?;
        Self::validate_base_url(&base_url)?;

        let connection = ConnectionConfig {
            base_url,
            skip_verify: self.skip_verify.unwrap_or(defaults.connection.skip_verify),
            timeout: self.timeout.unwrap_or(defaults.connection.timeout),
            max_retries: self.max_retries.unwrap_or(defaults.connection.max_retries),
        };
        Self::validate_connection(&connection)?;

        let cache = CacheConfig {
            enabled: self.cache_enabled.unwrap_or(defaults.cache.enabled),
            ttl: self.cache_ttl.unwrap_or(defaults.cache.ttl),
            capacity: self.cache_capacity.unwrap_or(defaults.cache.capacity),
        };
        Self::validate_cache(&cache)?;

        Ok(Config {
            connection,
            auth: AuthConfig {
                api_token: self.api_token,
            },
            cache,
            display: DisplayConfig {
                theme: self.dark_mode.map(ThemeFlag::new).unwrap_or_default(),
            },
        })
    }

    fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
        if base_url.trim().is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }

        let parsed = url::Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(())
    }

    /// Validates timeout and retry bounds.
    fn validate_connection(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        if connection.max_retries > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!(
                    "must be between 0 and {} (got {})",
                    MAX_MAX_RETRIES, connection.max_retries
                ),
            });
        }

        Ok(())
    }

    fn validate_cache(cache: &CacheConfig) -> Result<(), ConfigError> {
        if cache.ttl.as_secs() > MAX_CACHE_TTL_SECS {
            return Err(ConfigError::InvalidCache {
                message: format!(
                    "ttl exceeds maximum allowed value of {} seconds",
                    MAX_CACHE_TTL_SECS
                ),
            });
        }

        if cache.capacity == 0 {
            return Err(ConfigError::InvalidCache {
                message: "capacity must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    // Internal setters for use by the env module

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_api_token(&mut self, token: Option<SecretString>) {
        self.api_token = token;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_max_retries(&mut self, retries: Option<usize>) {
        self.max_retries = retries;
    }

    pub(crate) fn set_cache_enabled(&mut self, enabled: Option<bool>) {
        self.cache_enabled = enabled;
    }

    pub(crate) fn set_cache_ttl(&mut self, ttl: Option<Duration>) {
        self.cache_ttl = ttl;
    }

    pub(crate) fn set_cache_capacity(&mut self, capacity: Option<u64>) {
        self.cache_capacity = capacity;
    }

    pub(crate) fn set_dark_mode(&mut self, dark: Option<bool>) {
        self.dark_mode = dark;
    }
}
