//! Main marketplace REST API client and API methods.
//!
//! This module provides the primary [`TicketClient`]. Read queries go through
//! the [`QueryCache`](cache::QueryCache), so identical concurrent reads share
//! one request; mutations go straight to the backend and invalidate the
//! cached reads they affect.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - [`cache`]: Query cache, fetch policies and deduplication
//! - `tickets`: Ticket search and listing methods
//! - `bookings`: Booking history, creation and status methods
//! - `vendors`: Vendor approval methods
//! - `payment`: Payment confirmation
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Mapping failures to user-facing states (see [`crate::state`])
//!
//! # Invariants
//! - Every method takes `&self`; the client is `Send + Sync` and cheap to share
//!   behind an `Arc`.
//! - Cache keys for reads are derived only from the normalized request.

pub mod builder;
pub mod cache;

mod bookings;
mod payment;
mod tickets;
mod vendors;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::endpoints::RetryPolicy;
use crate::metrics::MetricsCollector;
use cache::QueryCache;

/// Ticket marketplace REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use ticket_client::TicketClient;
///
/// let client = TicketClient::builder()
///     .base_url("https://api.example.com".to_string())
///     .build()?;
/// let tickets = client.latest_tickets().await?;
/// ```
#[derive(Debug)]
pub struct TicketClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) auth_token: Option<SecretString>,
    pub(crate) max_retries: usize,
    pub(crate) retry_base_delay: Duration,
    pub(crate) metrics: Option<MetricsCollector>,
    pub(crate) cache: QueryCache,
}

impl TicketClient {
    /// Create a new client builder.
    pub fn builder() -> builder::TicketClientBuilder {
        builder::TicketClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The query cache backing read methods.
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    pub(crate) fn token(&self) -> Option<&str> {
        self.auth_token.as_ref().map(|t| t.expose_secret())
    }

    /// Retry budget for `retries` retries with this client's backoff base.
    pub(crate) fn retry_policy(&self, retries: usize) -> RetryPolicy {
        RetryPolicy::new(retries, self.retry_base_delay)
    }

    /// Retry budget for requests without a query-specific policy.
    pub(crate) fn default_retry(&self) -> RetryPolicy {
        self.retry_policy(self.max_retries)
    }
}
