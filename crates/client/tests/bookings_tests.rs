//! Booking endpoint tests.
//!
//! # Invariants
//! - Listing requires an email and sends it as a query parameter
//! - Missing quantity or total price fall back to one seat at unit price
//! - Creation is validated locally before any request is sent
//! - Status updates are sent as `PATCH /bookings/status/{id}` with `{ status }`

mod common;

use common::*;
use ticket_client::{BookingStatus, BookingUser, NewBooking, Ticket};
use wiremock::matchers::{body_json, method, path, query_param};

#[tokio::test]
async fn test_list_bookings() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("bookings/list_bookings.json");

    Mock::given(method("GET"))
        .and(path("/bookings"))
        .and(query_param("email", "rahim@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let bookings = client.list_bookings("rahim@example.com").await.unwrap();

    assert_eq!(bookings.len(), 3);

    let accepted = &bookings[0];
    assert_eq!(accepted.status, BookingStatus::Accepted);
    assert_eq!(accepted.quantity(), 2);
    assert_eq!(accepted.total_price(), 3600.0);
    assert_eq!(accepted.user_label(), "Rahim Uddin");

    let pending = &bookings[1];
    assert_eq!(pending.status, BookingStatus::Pending);
    assert_eq!(pending.quantity(), 1);
    assert_eq!(pending.total_price(), 700.0);
    assert!(matches!(pending.user, Some(BookingUser::Email(_))));
    assert_eq!(pending.user_label(), "rahim@example.com");

    let unknown = &bookings[2];
    assert_eq!(unknown.status, BookingStatus::Other("refunded".to_string()));
    assert_eq!(unknown.user_label(), "N/A");
}

#[tokio::test]
async fn test_list_bookings_requires_email() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    let err = client.list_bookings("  ").await.unwrap_err();

    assert!(matches!(err.unshared(), ClientError::InvalidRequest(_)), "got {err:?}");
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_booking() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("bookings/create_booking.json");
    let ticket: Ticket =
        serde_json::from_value(load_fixture("tickets/get_ticket.json")).unwrap();

    Mock::given(method("POST"))
        .and(path("/bookings"))
        .and(body_json(serde_json::json!({
            "ticketId": "665f1c2a9b1e4a0012a0b001",
            "quantity": 2,
            "ticketTitle": "Green Line Scania AC",
            "price": 1800.0,
            "totalPrice": 3600.0,
            "userEmail": "rahim@example.com",
            "status": "pending"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let booking =
        NewBooking::for_ticket(&ticket, 2).with_user(Some("rahim@example.com".to_string()), None);
    let result = client.create_booking(&booking).await.unwrap();

    assert_eq!(result.inserted_id, "6660a1b2c3d4e5f601020399");
    assert!(result.acknowledged);
}

#[tokio::test]
async fn test_create_booking_rejects_zero_quantity() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    let err = client
        .create_booking(&NewBooking::new("t1", 0))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidRequest(_)), "got {err:?}");
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_booking_rejects_blank_ticket() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    let err = client
        .create_booking(&NewBooking::new("", 1))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidRequest(_)), "got {err:?}");
}

#[tokio::test]
async fn test_update_booking_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/bookings/status/6660a1b2c3d4e5f601020302"))
        .and(body_json(serde_json::json!({"status": "rejected"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"modifiedCount": 1})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client
        .update_booking_status("6660a1b2c3d4e5f601020302", &BookingStatus::Rejected)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_booking_status_ignores_acknowledgement_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/bookings/status/b2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(
        client
            .update_booking_status("b2", &BookingStatus::Paid)
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_update_booking_status_forbidden() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/bookings/status/b3"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(serde_json::json!({"message": "forbidden access"})),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .update_booking_status("b3", &BookingStatus::Accepted)
        .await
        .unwrap_err();

    assert!(err.is_auth_error());
}
