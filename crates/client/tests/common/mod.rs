//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the marketplace client.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients built here retry after 10ms so retry tests stay fast
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::time::Duration;

#[allow(unused_imports)]
pub use ticket_client::testing::load_fixture;

#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use ticket_client::endpoints;
#[allow(unused_imports)]
pub use ticket_client::{ClientError, TicketClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Backoff base used by test clients.
#[allow(dead_code)]
pub const TEST_RETRY_DELAY: Duration = Duration::from_millis(10);

/// A client pointed at `server` with a fast retry backoff and a fresh cache.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> TicketClient {
    TicketClient::builder()
        .base_url(server.uri())
        .retry_base_delay(TEST_RETRY_DELAY)
        .build()
        .expect("client should build")
}

/// Retry policy for calling endpoint functions directly.
#[allow(dead_code)]
pub fn retry(retries: usize) -> endpoints::RetryPolicy {
    endpoints::RetryPolicy::new(retries, TEST_RETRY_DELAY)
}
