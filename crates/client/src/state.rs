//! Three-state query results for rendering layers.
//!
//! Responsibilities:
//! - Represent a read query as loading, failed or loaded.
//! - Collapse every [`ClientError`] into one generic user-facing message while
//!   keeping the [`ErrorCategory`] for logs.
//!
//! Does NOT handle:
//! - Fetching or caching (see [`crate::client::TicketClient`]).
//!
//! Invariants:
//! - A state is exactly one of loading, error or success.
//! - [`QueryError::message`] never carries backend or transport details.

use serde::Serialize;
use std::fmt;

use crate::error::ClientError;
use crate::metrics::ErrorCategory;

/// Message shown for every failed query.
pub const GENERIC_ERROR_MESSAGE: &str = "Unable to load data. Please refresh the page.";

/// A failed query as presented to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryError {
    pub message: String,
    pub category: ErrorCategory,
}

impl QueryError {
    pub fn new(category: ErrorCategory) -> Self {
        Self {
            message: GENERIC_ERROR_MESSAGE.to_string(),
            category,
        }
    }
}

impl From<&ClientError> for QueryError {
    fn from(error: &ClientError) -> Self {
        Self::new(ErrorCategory::from(error))
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Discriminant of a [`QueryState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryStatus {
    Loading,
    Error,
    Success,
}

impl QueryStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            QueryStatus::Loading => "loading",
            QueryStatus::Error => "error",
            QueryStatus::Success => "success",
        }
    }
}

impl fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of a read query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum QueryState<T> {
    Loading,
    Error(QueryError),
    Success(T),
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        QueryState::Loading
    }
}

impl<T> QueryState<T> {
    /// Settle a finished fetch. Failures are logged with their full detail.
    pub fn from_result(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(data) => QueryState::Success(data),
            Err(e) => {
                let error = QueryError::from(&e);
                tracing::warn!(
                    error = %e,
                    category = error.category.as_str(),
                    "Query failed"
                );
                QueryState::Error(error)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QueryState::Error(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, QueryState::Success(_))
    }

    /// Loaded data, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&QueryError> {
        match self {
            QueryState::Error(error) => Some(error),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            QueryState::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Transform loaded data, keeping loading and error states as they are.
    pub fn map<U, F>(self, f: F) -> QueryState<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            QueryState::Loading => QueryState::Loading,
            QueryState::Error(error) => QueryState::Error(error),
            QueryState::Success(data) => QueryState::Success(f(data)),
        }
    }

    pub fn status(&self) -> QueryStatus {
        match self {
            QueryState::Loading => QueryStatus::Loading,
            QueryState::Error(_) => QueryStatus::Error,
            QueryState::Success(_) => QueryStatus::Success,
        }
    }
}
