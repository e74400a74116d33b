//! Error types for the ticket marketplace client.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during ticket marketplace client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from the backend.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Response body did not match the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Rate limited - too many requests.
    #[error("Rate limited: retry after {0:?}")]
    RateLimited(Option<Duration>),

    /// Maximum retries exceeded.
    #[error("Maximum retries exceeded ({0} attempts): {1}")]
    MaxRetriesExceeded(usize, Box<ClientError>),

    /// Not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Unauthorized access.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Request rejected before it was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Failure of a fetch shared with other waiters on the same cache key.
    #[error(transparent)]
    Shared(Arc<ClientError>),
}

impl ClientError {
    /// Recover an owned error from one shared by coalesced cache waiters.
    pub fn from_shared(error: Arc<ClientError>) -> Self {
        Arc::try_unwrap(error).unwrap_or_else(Self::Shared)
    }

    /// The underlying error, looking through [`ClientError::Shared`].
    pub fn unshared(&self) -> &ClientError {
        match self {
            Self::Shared(inner) => inner.unshared(),
            other => other,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpError(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            Self::Timeout(_) | Self::RateLimited(_) => true,
            Self::ApiError { status, .. } => Self::is_retryable_status(*status),
            Self::Shared(inner) => inner.is_retryable(),
            _ => false,
        }
    }

    /// Check if an HTTP status code is retryable.
    ///
    /// Retryable status codes:
    /// - 429: Too Many Requests (rate limiting)
    /// - 502: Bad Gateway (transient server error)
    /// - 503: Service Unavailable (transient server error)
    /// - 504: Gateway Timeout (transient server error)
    ///
    /// 500 and 501 usually indicate a backend bug, not a transient failure,
    /// so they fail immediately along with every 4xx.
    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 429 | 502 | 503 | 504)
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::Unauthorized(_) => true,
            Self::ApiError { status, .. } => matches!(status, 401 | 403),
            Self::MaxRetriesExceeded(_, inner) => inner.is_auth_error(),
            Self::Shared(inner) => inner.is_auth_error(),
            _ => false,
        }
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            Self::NotFound(_) => Some(404),
            Self::Unauthorized(_) => Some(401),
            Self::RateLimited(_) => Some(429),
            Self::MaxRetriesExceeded(_, inner) => inner.status(),
            Self::Shared(inner) => inner.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_retryable() {
        let err = ClientError::Timeout(Duration::from_secs(1));
        assert!(err.is_retryable());

        let err = ClientError::RateLimited(None);
        assert!(err.is_retryable());

        let err = ClientError::Unauthorized("test".to_string());
        assert!(!err.is_retryable());

        let err = ClientError::InvalidResponse("bad json".to_string());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_api_error_retryable_follows_status() {
        let unavailable = ClientError::ApiError {
            status: 503,
            url: "http://localhost/tickets".to_string(),
            message: "Service Unavailable".to_string(),
        };
        assert!(unavailable.is_retryable());

        let bad_request = ClientError::ApiError {
            status: 400,
            url: "http://localhost/tickets".to_string(),
            message: "Bad Request".to_string(),
        };
        assert!(!bad_request.is_retryable());
    }

    #[test]
    fn test_error_is_auth_error() {
        let err = ClientError::Unauthorized("test".to_string());
        assert!(err.is_auth_error());

        let err = ClientError::ApiError {
            status: 403,
            url: "http://localhost/vendors/1".to_string(),
            message: "Forbidden".to_string(),
        };
        assert!(err.is_auth_error());

        let err = ClientError::Timeout(Duration::from_secs(1));
        assert!(!err.is_auth_error());
    }

    #[test]
    fn test_is_retryable_status_retryable() {
        assert!(ClientError::is_retryable_status(429));
        assert!(ClientError::is_retryable_status(502));
        assert!(ClientError::is_retryable_status(503));
        assert!(ClientError::is_retryable_status(504));
    }

    #[test]
    fn test_is_retryable_status_not_retryable() {
        assert!(!ClientError::is_retryable_status(400));
        assert!(!ClientError::is_retryable_status(401));
        assert!(!ClientError::is_retryable_status(403));
        assert!(!ClientError::is_retryable_status(404));
        assert!(!ClientError::is_retryable_status(500));
        assert!(!ClientError::is_retryable_status(501));
        assert!(!ClientError::is_retryable_status(200));
    }

    #[test]
    fn test_from_shared_unwraps_sole_owner() {
        let shared = Arc::new(ClientError::NotFound("ticket".to_string()));
        let owned = ClientError::from_shared(shared);
        assert!(matches!(owned, ClientError::NotFound(_)));
    }

    #[test]
    fn test_from_shared_keeps_wrapper_when_still_shared() {
        let shared = Arc::new(ClientError::Unauthorized("expired".to_string()));
        let other_waiter = Arc::clone(&shared);
        let owned = ClientError::from_shared(shared);

        assert!(matches!(owned, ClientError::Shared(_)));
        assert!(owned.is_auth_error());
        assert_eq!(owned.to_string(), other_waiter.to_string());
        assert!(matches!(owned.unshared(), ClientError::Unauthorized(_)));
    }

    #[test]
    fn test_status_reaches_through_retries() {
        let inner = ClientError::ApiError {
            status: 503,
            url: "http://localhost/tickets".to_string(),
            message: "down".to_string(),
        };
        let err = ClientError::MaxRetriesExceeded(3, Box::new(inner));
        assert_eq!(err.status(), Some(503));
    }
}
