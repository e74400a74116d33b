//! Retry behavior tests.
//!
//! # Invariants
//! - Advertised tickets retry twice on transient failures
//! - Ticket search and latest tickets never retry
//! - 502/503/504 and 429 are transient; 500 is not
//! - Exhausting retries on a transient failure yields `MaxRetriesExceeded`
//! - Mutations are sent exactly once

mod common;

use common::*;
use ticket_client::{NewBooking, TicketFilter};
use wiremock::matchers::{method, path};

async fn mount_unavailable(server: &MockServer, route: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_json(serde_json::json!({"message": "Service Unavailable"})),
        )
        .up_to_n_times(times)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_advertised_retries_twice_on_503_then_succeeds() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("tickets/advertised_tickets.json");

    mount_unavailable(&mock_server, "/tickets/advertise/current", 2).await;
    Mock::given(method("GET"))
        .and(path("/tickets/advertise/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let tickets = client.advertised_tickets().await.unwrap();

    assert_eq!(tickets.len(), 1);
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_advertised_gives_up_after_three_attempts() {
    let mock_server = MockServer::start().await;

    mount_unavailable(&mock_server, "/tickets/advertise/current", 10).await;

    let client = test_client(&mock_server);
    let err = client.advertised_tickets().await.unwrap_err();

    match err.unshared() {
        ClientError::MaxRetriesExceeded(attempts, inner) => {
            assert_eq!(*attempts, 3);
            assert_eq!(inner.status(), Some(503));
        }
        other => panic!("Expected MaxRetriesExceeded, got {other:?}"),
    }
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_search_does_not_retry() {
    let mock_server = MockServer::start().await;

    mount_unavailable(&mock_server, "/tickets", 10).await;

    let client = test_client(&mock_server);
    let err = client.search_tickets(&TicketFilter::default()).await.unwrap_err();

    assert!(
        matches!(err.unshared(), ClientError::ApiError { status: 503, .. }),
        "got {err:?}"
    );
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_latest_does_not_retry() {
    let mock_server = MockServer::start().await;

    mount_unavailable(&mock_server, "/tickets/latest", 10).await;

    let client = test_client(&mock_server);
    assert!(client.latest_tickets().await.is_err());
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_retry_on_502_and_504() {
    for status in [502u16, 504] {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tickets/latest"))
            .respond_with(ResponseTemplate::new(status))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/tickets/latest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let result = endpoints::latest_tickets(
            &Client::new(),
            &mock_server.uri(),
            None,
            retry(1),
            None,
        )
        .await;

        assert!(result.is_ok(), "status {status} should be retried");
    }
}

#[tokio::test]
async fn test_no_retry_on_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tickets/latest"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = endpoints::latest_tickets(&Client::new(), &mock_server.uri(), None, retry(3), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::ApiError { status: 500, .. }), "got {err:?}");
}

#[tokio::test]
async fn test_rate_limit_honours_retry_after() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tickets/latest"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tickets/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let result =
        endpoints::latest_tickets(&Client::new(), &mock_server.uri(), None, retry(1), None).await;

    assert!(result.is_ok());
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_rate_limit_without_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tickets/latest"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
        .mount(&mock_server)
        .await;

    let err = endpoints::latest_tickets(&Client::new(), &mock_server.uri(), None, retry(0), None)
        .await
        .unwrap_err();

    assert!(
        matches!(err, ClientError::RateLimited(Some(d)) if d.as_secs() == 30),
        "got {err:?}"
    );
}

#[tokio::test]
async fn test_create_booking_is_sent_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bookings"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TicketClient::builder()
        .base_url(mock_server.uri())
        .max_retries(3)
        .retry_base_delay(TEST_RETRY_DELAY)
        .build()
        .unwrap();

    let err = client
        .create_booking(&NewBooking::new("t1", 1))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
}
