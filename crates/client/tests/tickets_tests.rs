//! Ticket endpoint and client method tests.
//!
//! # Invariants
//! - Searches send all six normalized query parameters, including empty ones
//! - The advertised envelope is unwrapped to its `data` array
//! - Path segments are percent-encoded
//! - A configured token is sent as a bearer header

mod common;

use common::*;
use secrecy::SecretString;
use ticket_client::query::build as build_query;
use ticket_client::{TicketFilter, TransportType};
use wiremock::matchers::{header, method, path, query_param};

#[tokio::test]
async fn test_search_sends_normalized_params() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("tickets/search_tickets.json");

    Mock::given(method("GET"))
        .and(path("/tickets"))
        .and(query_param("searchText", "scania"))
        .and(query_param("from", "Dhaka"))
        .and(query_param("to", "Cox's Bazar"))
        .and(query_param("transportType", "bus"))
        .and(query_param("sortBy", "price"))
        .and(query_param("sortOrder", "asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let filter = TicketFilter::new()
        .search("scania")
        .from_location("Dhaka")
        .to_location("Cox's Bazar")
        .transport("bus")
        .sort("price-low");

    let tickets = client.search_tickets(&filter).await.unwrap();

    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[0].id, "665f1c2a9b1e4a0012a0b001");
    assert_eq!(tickets[0].transport(), Some(TransportType::Bus));
    assert_eq!(tickets[0].perks.len(), 3);
    assert!(tickets[0].vendor.is_some());

    // String-typed numbers and a naive timestamp
    assert_eq!(tickets[1].price, 950.0);
    assert_eq!(tickets[1].available_tickets, 0);
    assert!(tickets[1].departure.is_some());
    assert!(tickets[1].perks.is_empty());
    assert!(tickets[1].vendor.is_none());
}

#[tokio::test]
async fn test_search_all_transport_sends_empty_value() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tickets"))
        .and(query_param("transportType", ""))
        .and(query_param("searchText", ""))
        .and(query_param("sortBy", "createdAt"))
        .and(query_param("sortOrder", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let tickets = client.search_tickets(&TicketFilter::default()).await.unwrap();

    assert!(tickets.is_empty());
}

#[tokio::test]
async fn test_search_endpoint_directly() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("tickets/search_tickets.json");

    Mock::given(method("GET"))
        .and(path("/tickets"))
        .and(query_param("sortBy", "createdAt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let params = build_query(&TicketFilter::new().sort("rating"));
    let tickets = endpoints::search_tickets(
        &Client::new(),
        &mock_server.uri(),
        None,
        &params,
        retry(0),
        None,
    )
    .await
    .unwrap();

    assert_eq!(tickets.len(), 2);
}

#[tokio::test]
async fn test_latest_tickets() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("tickets/latest_tickets.json");

    Mock::given(method("GET"))
        .and(path("/tickets/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let tickets = client.latest_tickets().await.unwrap();

    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[1].transport(), Some(TransportType::Launch));
    assert!(tickets[1].departure.is_none());
}

#[tokio::test]
async fn test_advertised_tickets_unwraps_data() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("tickets/advertised_tickets.json");

    Mock::given(method("GET"))
        .and(path("/tickets/advertise/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let tickets = client.advertised_tickets().await.unwrap();

    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].price, 4500.5);
    // Epoch millis
    assert!(tickets[0].departure.is_some());
}

#[tokio::test]
async fn test_advertised_tickets_missing_data_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tickets/advertise/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.advertised_tickets().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_ticket_encodes_id() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("tickets/get_ticket.json");

    Mock::given(method("GET"))
        .and(path("/tickets/abc%2F123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let ticket = client.get_ticket("abc/123").await.unwrap();

    assert_eq!(ticket.title, "Green Line Scania AC");
}

#[tokio::test]
async fn test_get_ticket_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tickets/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.get_ticket("missing").await.unwrap_err();

    assert!(matches!(err.unshared(), ClientError::NotFound(_)), "got {err:?}");
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tickets/latest"))
        .and(header("Authorization", "Bearer firebase-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TicketClient::builder()
        .base_url(mock_server.uri())
        .api_token(SecretString::new("firebase-jwt".to_string().into()))
        .build()
        .unwrap();

    client.latest_tickets().await.unwrap();
}

#[tokio::test]
async fn test_unexpected_shape_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tickets/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"tickets": []})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.latest_tickets().await.unwrap_err();

    assert!(matches!(err.unshared(), ClientError::InvalidResponse(_)), "got {err:?}");
}

#[tokio::test]
async fn test_unauthorized_is_auth_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tickets/latest"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({"message": "unauthorized access"})),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.latest_tickets().await.unwrap_err();

    assert!(err.is_auth_error());
    assert!(err.to_string().contains("unauthorized access"));
}

#[tokio::test]
async fn test_failed_query_state_hides_details() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tickets/latest"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({"message": "db exploded"})),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let state = client.latest_tickets_state().await;

    let error = state.error().expect("state should be an error");
    assert_eq!(error.message, "Unable to load data. Please refresh the page.");
    assert_eq!(error.category, ticket_client::ErrorCategory::Http5xx);
}
