//! Client builder for constructing [`TicketClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating the base URL and normalizing it (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, redirects, TLS verification)
//! - Sizing the query cache
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`TicketClient`] methods)
//! - Loading configuration from the environment (see `ticket_config::ConfigLoader`)
//!
//! # Invariants
//! - `base_url` is required and must use `http` or `https`
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use secrecy::SecretString;
use ticket_config::{
    Config,
    constants::{
        DEFAULT_MAX_REDIRECTS, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_BASE_DELAY_MS,
        DEFAULT_TIMEOUT_SECS,
    },
};

use crate::client::TicketClient;
use crate::client::cache::QueryCache;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Builder for creating a new [`TicketClient`].
///
/// Every option has a default except `base_url`.
pub struct TicketClientBuilder {
    base_url: Option<String>,
    auth_token: Option<SecretString>,
    skip_verify: bool,
    timeout: Duration,
    max_retries: usize,
    retry_base_delay: Duration,
    metrics: Option<MetricsCollector>,
    cache: Option<QueryCache>,
}

impl Default for TicketClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth_token: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_delay: Duration::from_millis(DEFAULT_RETRY_BASE_DELAY_MS),
            metrics: None,
            cache: None,
        }
    }
}

impl TicketClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL, e.g. `https://api.example.com`.
    ///
    /// Trailing slashes are removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Send `Authorization: Bearer <token>` with every request.
    pub fn api_token(mut self, token: SecretString) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against development backends with self-signed certificates.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retries for requests without a query-specific fetch policy. Default is 0.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Delay before the first retry; later retries double it. Default is 1 second.
    pub fn retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    /// Set the metrics collector for API call performance tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Use a preconfigured query cache.
    pub fn cache(mut self, cache: QueryCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Create a client builder from loaded configuration.
    ///
    /// ```rust,ignore
    /// let config = ConfigLoader::new().load_dotenv()?.from_env()?.build()?;
    /// let client = TicketClient::builder().from_config(&config).build()?;
    /// ```
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.auth_token = config.auth.api_token.clone();
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.max_retries = config.connection.max_retries;
        self.cache = Some(QueryCache::from_config(&config.cache));
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://api.example.com/"` -> `"https://api.example.com"`
    /// - `"https://api.example.com//"` -> `"https://api.example.com"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`TicketClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is missing or not an
    /// http(s) URL, and `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<TicketClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let parsed = reqwest::Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "{base_url}: unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if parsed.scheme() == "https" {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        let mut cache = self.cache.unwrap_or_default();
        if let Some(metrics) = &self.metrics {
            cache = cache.with_metrics(metrics.clone());
        }

        Ok(TicketClient {
            http,
            base_url,
            auth_token: self.auth_token,
            max_retries: self.max_retries,
            retry_base_delay: self.retry_base_delay,
            metrics: self.metrics,
            cache,
        })
    }
}
