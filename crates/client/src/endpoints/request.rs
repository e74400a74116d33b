//! Retry helper for HTTP requests with exponential backoff.
//!
//! Responsibilities:
//! - Send a request, re-sending it on transport failures and retryable
//!   statuses (429, 502, 503, 504) within the caller's retry budget.
//! - Convert non-success responses into typed [`ClientError`]s.
//! - Record per-attempt metrics.
//!
//! Does NOT handle:
//! - Choosing the retry budget (fetch policies live in [`crate::client::cache`]).
//! - Caching or deduplication.
//!
//! Invariants:
//! - A budget of `0` retries means exactly one attempt.
//! - Backoff before retry `n` (0-based) is `2^n` times the base delay, unless a
//!   429 response carries `Retry-After`, which is honoured up to a ceiling.
//! - Requests whose body cannot be cloned are sent once.

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use ticket_config::constants::DEFAULT_RETRY_BASE_DELAY_MS;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Ceiling on server-requested `Retry-After` waits.
const MAX_RETRY_AFTER: Duration = Duration::from_secs(60);

/// Retry budget for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub retries: usize,
    /// Delay before the first retry; doubles for each one after.
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub const fn new(retries: usize, base_delay: Duration) -> Self {
        Self {
            retries,
            base_delay,
        }
    }

    /// A single attempt.
    pub const fn none() -> Self {
        Self::new(0, Duration::from_millis(DEFAULT_RETRY_BASE_DELAY_MS))
    }

    /// Backoff before the retry following attempt `attempt` (0-based).
    pub fn backoff(&self, attempt: usize) -> Duration {
        let factor = 2u32.saturating_pow(u32::try_from(attempt).unwrap_or(u32::MAX));
        self.base_delay.saturating_mul(factor)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

struct AttemptFailure {
    error: ClientError,
    retry_after: Option<Duration>,
}

/// Sends an HTTP request, retrying transient failures.
///
/// # Errors
///
/// Returns the error of the last attempt. When at least one retry happened
/// and the last failure was still transient, it is wrapped in
/// [`ClientError::MaxRetriesExceeded`].
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    retry: RetryPolicy,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    let mut attempt = 0usize;

    loop {
        let Some(attempt_builder) = builder.try_clone() else {
            debug!(endpoint, "Request cannot be cloned, sending a single attempt");
            return send_once(builder, endpoint, method, metrics)
                .await
                .map_err(|failure| failure.error);
        };

        match send_once(attempt_builder, endpoint, method, metrics).await {
            Ok(response) => {
                if attempt > 0 {
                    debug!(endpoint, attempt = attempt + 1, "Request succeeded after retry");
                }
                return Ok(response);
            }
            Err(failure) if attempt < retry.retries && failure.error.is_retryable() => {
                let delay = failure
                    .retry_after
                    .map(|d| d.min(MAX_RETRY_AFTER))
                    .unwrap_or_else(|| retry.backoff(attempt));
                attempt += 1;
                debug!(
                    endpoint,
                    attempt,
                    max_retries = retry.retries,
                    delay_ms = delay.as_millis() as u64,
                    error = %failure.error,
                    "Transient failure, retrying with backoff"
                );
                if let Some(m) = metrics {
                    m.record_retry(endpoint, method, attempt);
                }
                tokio::time::sleep(delay).await;
            }
            Err(failure) => {
                if let Some(m) = metrics {
                    m.record_client_error(endpoint, method, &failure.error);
                }
                if attempt > 0 && failure.error.is_retryable() {
                    debug!(endpoint, attempts = attempt + 1, "Retry budget exhausted");
                    return Err(ClientError::MaxRetriesExceeded(
                        attempt + 1,
                        Box::new(failure.error),
                    ));
                }
                return Err(failure.error);
            }
        }
    }
}

async fn send_once(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> std::result::Result<Response, AttemptFailure> {
    if let Some(m) = metrics {
        m.record_request(endpoint, method);
    }
    let started = Instant::now();

    match builder.send().await {
        Ok(response) => {
            let status = response.status();
            if let Some(m) = metrics {
                m.record_request_duration(endpoint, method, started.elapsed(), Some(status.as_u16()));
            }
            if status.is_success() {
                return Ok(response);
            }
            let retry_after = (status == StatusCode::TOO_MANY_REQUESTS)
                .then(|| parse_retry_after(response.headers()))
                .flatten();
            let error = error_from_response(response, retry_after).await;
            Err(AttemptFailure { error, retry_after })
        }
        Err(e) => {
            if let Some(m) = metrics {
                m.record_request_duration(endpoint, method, started.elapsed(), None);
            }
            Err(AttemptFailure {
                error: ClientError::from(e),
                retry_after: None,
            })
        }
    }
}

/// `Retry-After` in delta-seconds form. HTTP-date values are ignored.
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

async fn error_from_response(response: Response, retry_after: Option<Duration>) -> ClientError {
    let status = response.status();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());
    let message = extract_message(&body).unwrap_or_else(|| {
        if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("no response body").to_string()
        } else {
            body
        }
    });

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ClientError::Unauthorized(message),
        StatusCode::NOT_FOUND => ClientError::NotFound(url),
        StatusCode::TOO_MANY_REQUESTS => ClientError::RateLimited(retry_after),
        _ => ClientError::ApiError {
            status: status.as_u16(),
            url,
            message,
        },
    }
}

/// Pull a human-readable message out of a JSON error body.
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key)?.as_str().map(str::to_string))
}

/// Deserialize a successful response body.
///
/// Failures are reported as [`ClientError::InvalidResponse`] naming the endpoint.
pub async fn parse_json<T: DeserializeOwned>(
    response: Response,
    endpoint: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        if let Some(m) = metrics {
            m.record_deserialization_failure(endpoint);
        }
        ClientError::InvalidResponse(format!("{endpoint}: {e}"))
    })
}
