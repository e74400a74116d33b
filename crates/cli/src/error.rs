//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-8 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use ticket_client::ClientError;

/// Structured exit codes for ticket-cli.
///
/// These codes let scripts tell failure modes apart and decide whether to
/// retry, refresh the token, or fail fast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Missing, invalid or expired token (HTTP 401/403).
    AuthenticationFailed = 2,

    /// Network, timeout, or DNS failure.
    ///
    /// Scripts may retry with exponential backoff.
    ConnectionError = 3,

    /// Ticket, booking or vendor does not exist.
    NotFound = 4,

    /// Bad input or a response body the client could not read.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// HTTP 429 Too Many Requests.
    RateLimited = 7,

    /// HTTP 502/503/504 from the backend.
    ServiceUnavailable = 8,

    /// SIGINT/Ctrl+C (128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    /// Returns true if this exit code indicates a retryable condition.
    #[allow(dead_code)]
    pub const fn is_retryable(self) -> bool {
        matches!(
            self,
            ExitCode::ConnectionError | ExitCode::RateLimited | ExitCode::ServiceUnavailable
        )
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Unauthorized(_) => ExitCode::AuthenticationFailed,

            ClientError::Timeout(_) => ExitCode::ConnectionError,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,

            ClientError::NotFound(_) => ExitCode::NotFound,

            ClientError::InvalidRequest(_) => ExitCode::ValidationError,
            ClientError::InvalidResponse(_) => ExitCode::ValidationError,
            ClientError::ApiError { status: 400, .. } => ExitCode::ValidationError,

            ClientError::RateLimited(_) => ExitCode::RateLimited,

            ClientError::ApiError {
                status: 502..=504, ..
            } => ExitCode::ServiceUnavailable,

            // Look through retry exhaustion and shared cache failures.
            ClientError::MaxRetriesExceeded(_, inner) => Self::from(inner.as_ref()),
            ClientError::Shared(inner) => Self::from(inner.as_ref()),

            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            ClientError::ApiError { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no ClientError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
