//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `TICKET_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::MAX_MAX_RETRIES;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            tracing::debug!(var = key, "Ignoring blank environment variable");
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse an environment variable, mapping parse failures to `InvalidValue`.
fn parse_env<T: FromStr>(key: &str, message: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(key)
        .map(|raw| {
            raw.parse::<T>().map_err(|_| ConfigError::InvalidValue {
                var: key.to_string(),
                message: message.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("TICKET_BASE_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(token) = env_var_or_none("TICKET_API_TOKEN") {
        loader.set_api_token(Some(SecretString::new(token.into())));
    }
    if let Some(skip) = parse_env::<bool>("TICKET_SKIP_VERIFY", "must be true or false")? {
        loader.set_skip_verify(Some(skip));
    }
    if let Some(secs) = parse_env::<u64>("TICKET_TIMEOUT", "must be a number")? {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(value) =
        parse_env::<usize>("TICKET_MAX_RETRIES", "must be a non-negative integer")?
    {
        if value > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!("must be between 0 and {} (got {})", MAX_MAX_RETRIES, value),
            });
        }
        loader.set_max_retries(Some(value));
    }
    if let Some(secs) = parse_env::<u64>("TICKET_CACHE_TTL", "must be a number")? {
        loader.set_cache_ttl(Some(Duration::from_secs(secs)));
    }
    if let Some(size) = parse_env::<u64>("TICKET_CACHE_SIZE", "must be a positive number")? {
        loader.set_cache_capacity(Some(size));
    }
    if let Some(disabled) =
        parse_env::<bool>("TICKET_CACHE_DISABLED", "must be true or false")?
    {
        loader.set_cache_enabled(Some(!disabled));
    }
    if let Some(dark) = parse_env::<bool>("TICKET_DARK_MODE", "must be true or false")? {
        loader.set_dark_mode(Some(dark));
    }

    Ok(())
}
