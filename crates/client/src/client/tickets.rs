//! Ticket query methods for [`TicketClient`].
//!
//! # What this module handles:
//! - Filtered ticket search, keyed by the normalized query
//! - Latest and advertised ticket listings
//! - Single ticket lookup
//! - [`QueryState`] wrappers for rendering layers
//!
//! # What this module does NOT handle:
//! - Filter normalization (in [`crate::query`])
//! - Low-level HTTP calls (in [`crate::endpoints::tickets`])

use crate::client::TicketClient;
use crate::client::cache::{
    ADVERTISED_TICKETS_KEY, FetchPolicy, LATEST_TICKETS_KEY, TICKET_BY_ID_KEY_PREFIX,
};
use crate::endpoints::{self, encode_path_segment};
use crate::error::Result;
use crate::models::Ticket;
use crate::query::{self, TicketFilter, TicketQueryParams};
use crate::state::QueryState;

impl TicketClient {
    /// Search tickets matching a user filter.
    ///
    /// The filter is normalized first; identical searches share one request
    /// and one cache entry.
    pub async fn search_tickets(&self, filter: &TicketFilter) -> Result<Vec<Ticket>> {
        let params = query::build(filter);
        self.search_tickets_with_params(&params).await
    }

    /// Search tickets with already-normalized parameters.
    pub async fn search_tickets_with_params(
        &self,
        params: &TicketQueryParams,
    ) -> Result<Vec<Ticket>> {
        let key = params.cache_key();
        let policy = FetchPolicy::TICKET_SEARCH;

        self.cache
            .get_or_fetch(&key, policy, async {
                tracing::debug!(key = %key, "Fetching ticket search");
                endpoints::search_tickets(
                    &self.http,
                    &self.base_url,
                    self.token(),
                    params,
                    self.retry_policy(policy.retries),
                    self.metrics.as_ref(),
                )
                .await
            })
            .await
    }

    /// Most recently added tickets.
    pub async fn latest_tickets(&self) -> Result<Vec<Ticket>> {
        let policy = FetchPolicy::LATEST_TICKETS;

        self.cache
            .get_or_fetch(
                LATEST_TICKETS_KEY,
                policy,
                endpoints::latest_tickets(
                    &self.http,
                    &self.base_url,
                    self.token(),
                    self.retry_policy(policy.retries),
                    self.metrics.as_ref(),
                ),
            )
            .await
    }

    /// Tickets currently advertised on the home page. Retried on transient failures.
    pub async fn advertised_tickets(&self) -> Result<Vec<Ticket>> {
        let policy = FetchPolicy::ADVERTISED_TICKETS;

        self.cache
            .get_or_fetch(
                ADVERTISED_TICKETS_KEY,
                policy,
                endpoints::advertised_tickets(
                    &self.http,
                    &self.base_url,
                    self.token(),
                    self.retry_policy(policy.retries),
                    self.metrics.as_ref(),
                ),
            )
            .await
    }

    /// A single ticket by id.
    pub async fn get_ticket(&self, ticket_id: &str) -> Result<Ticket> {
        let key = format!("{TICKET_BY_ID_KEY_PREFIX}{}", encode_path_segment(ticket_id));
        let policy = FetchPolicy::new(self.max_retries);

        self.cache
            .get_or_fetch(
                &key,
                policy,
                endpoints::get_ticket(
                    &self.http,
                    &self.base_url,
                    self.token(),
                    ticket_id,
                    self.retry_policy(policy.retries),
                    self.metrics.as_ref(),
                ),
            )
            .await
    }

    pub async fn search_tickets_state(&self, filter: &TicketFilter) -> QueryState<Vec<Ticket>> {
        QueryState::from_result(self.search_tickets(filter).await)
    }

    pub async fn latest_tickets_state(&self) -> QueryState<Vec<Ticket>> {
        QueryState::from_result(self.latest_tickets().await)
    }

    pub async fn advertised_tickets_state(&self) -> QueryState<Vec<Ticket>> {
        QueryState::from_result(self.advertised_tickets().await)
    }
}
