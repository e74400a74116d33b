//! Metrics collection for API call performance.
//!
//! This module provides metrics collection for marketplace API calls, including:
//! - Request latency histograms
//! - Request counters (total, retries, errors)
//! - Query cache hit/miss counters
//! - Error categorization
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (see [`crate::metrics_exporter`])
//! - Persistent storage of metrics
//!
//! # Invariants
//! - All metrics use consistent label names: `endpoint`, `method`, `status`, `error_category`
//! - Metric recording is infallible and never disrupts API calls
//! - Zero-cost when no metrics recorder is installed

use crate::error::ClientError;
use serde::Serialize;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "ticket_api_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "ticket_api_requests_total";

/// Metric name for retry counter.
pub const METRIC_RETRIES_TOTAL: &str = "ticket_api_retries_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "ticket_api_errors_total";

/// Metric name for cache hit counter.
pub const METRIC_CACHE_HITS: &str = "ticket_api_cache_hits_total";

/// Metric name for cache miss counter.
pub const METRIC_CACHE_MISSES: &str = "ticket_api_cache_misses_total";

/// Metric name for deserialization failure counter.
pub const METRIC_DESERIALIZATION_FAILURES: &str = "ticket_api_deserialization_failures_total";

/// Error categories for metrics labeling and query error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Transport-level errors (connection refused, DNS, etc.)
    Transport,
    /// HTTP 4xx client errors
    Http4xx,
    /// HTTP 5xx server errors
    Http5xx,
    /// Response body did not match the expected shape
    Decode,
    /// Request timeout
    Timeout,
    /// Unknown/unclassified errors
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Decode => "decode",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Timeout(_) => ErrorCategory::Timeout,
            ClientError::HttpError(e) if e.is_timeout() => ErrorCategory::Timeout,
            ClientError::HttpError(e) if e.is_decode() => ErrorCategory::Decode,
            ClientError::HttpError(e) if e.is_connect() || e.is_request() => {
                ErrorCategory::Transport
            }
            ClientError::HttpError(_) => ErrorCategory::Unknown,
            ClientError::InvalidResponse(_) => ErrorCategory::Decode,
            ClientError::NotFound(_)
            | ClientError::Unauthorized(_)
            | ClientError::RateLimited(_)
            | ClientError::InvalidRequest(_) => ErrorCategory::Http4xx,
            ClientError::ApiError { status, .. } => {
                if (400..500).contains(status) {
                    ErrorCategory::Http4xx
                } else if (500..600).contains(status) {
                    ErrorCategory::Http5xx
                } else {
                    ErrorCategory::Unknown
                }
            }
            ClientError::MaxRetriesExceeded(_, inner) => ErrorCategory::from(inner.as_ref()),
            ClientError::Shared(inner) => ErrorCategory::from(inner.as_ref()),
            ClientError::InvalidUrl(_) => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for marketplace API calls.
///
/// Lightweight wrapper around the `metrics` crate macros, providing
/// type-safe methods for recording API metrics with consistent labels.
///
/// # Example
///
/// ```rust,ignore
/// use ticket_client::metrics::MetricsCollector;
///
/// let collector = MetricsCollector::new();
/// collector.record_request_duration("/tickets", "GET", Duration::from_millis(150), Some(200));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create a new, enabled metrics collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of an API request.
    ///
    /// `status` is `None` when the request failed before a response arrived.
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt, including retries.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record a retry attempt (1-based, not counting the initial request).
    pub fn record_retry(&self, endpoint: &str, method: &str, attempt: usize) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_RETRIES_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "attempt" => attempt.to_string(),
        )
        .increment(1);
    }

    pub fn record_error(&self, endpoint: &str, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    /// Record an error, categorizing it automatically.
    pub fn record_client_error(&self, endpoint: &str, method: &str, error: &ClientError) {
        self.record_error(endpoint, method, ErrorCategory::from(error));
    }

    pub fn record_cache_hit(&self) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_CACHE_HITS).increment(1);
    }

    pub fn record_cache_miss(&self) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_CACHE_MISSES).increment(1);
    }

    /// Record a response body that failed to deserialize.
    pub fn record_deserialization_failure(&self, endpoint: &str) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_DESERIALIZATION_FAILURES,
            "endpoint" => endpoint.to_string(),
        )
        .increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_as_str() {
        assert_eq!(ErrorCategory::Transport.as_str(), "transport");
        assert_eq!(ErrorCategory::Http4xx.as_str(), "http_4xx");
        assert_eq!(ErrorCategory::Http5xx.as_str(), "http_5xx");
        assert_eq!(ErrorCategory::Decode.as_str(), "decode");
        assert_eq!(ErrorCategory::Timeout.as_str(), "timeout");
        assert_eq!(ErrorCategory::Unknown.as_str(), "unknown");
    }

    #[test]
    fn test_error_categorization() {
        let timeout_err = ClientError::Timeout(Duration::from_secs(1));
        assert_eq!(ErrorCategory::from(&timeout_err), ErrorCategory::Timeout);

        let decode_err = ClientError::InvalidResponse("expected array".to_string());
        assert_eq!(ErrorCategory::from(&decode_err), ErrorCategory::Decode);

        let not_found = ClientError::NotFound("/tickets/missing".to_string());
        assert_eq!(ErrorCategory::from(&not_found), ErrorCategory::Http4xx);

        let api_500 = ClientError::ApiError {
            status: 500,
            url: "test".to_string(),
            message: "server error".to_string(),
        };
        assert_eq!(ErrorCategory::from(&api_500), ErrorCategory::Http5xx);
    }

    #[test]
    fn test_max_retries_exceeded_categorization() {
        let inner = ClientError::ApiError {
            status: 503,
            url: "test".to_string(),
            message: "unavailable".to_string(),
        };
        let outer = ClientError::MaxRetriesExceeded(3, Box::new(inner));
        assert_eq!(ErrorCategory::from(&outer), ErrorCategory::Http5xx);
    }

    #[test]
    fn test_metrics_collector_enabled() {
        let collector = MetricsCollector::new();
        assert!(collector.is_enabled());

        let disabled = MetricsCollector::disabled();
        assert!(!disabled.is_enabled());
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        let collector = MetricsCollector::new();
        collector.record_request("/tickets", "GET");
        collector.record_request_duration("/tickets", "GET", Duration::from_millis(5), Some(200));
        collector.record_cache_hit();
        collector.record_cache_miss();
        collector.record_deserialization_failure("/tickets");
    }
}
