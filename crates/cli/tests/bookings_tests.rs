//! Integration tests for `ticket-cli bookings`.

mod common;

use common::{load_fixture, ticket_cmd, ticket_cmd_with_base_url};
use predicates::prelude::*;
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_bookings_table() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bookings"))
        .and(query_param("email", "rahim@example.com"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("bookings/list_bookings.json")),
        )
        .mount(&server)
        .await;

    ticket_cmd_with_base_url(&server.uri())
        .args(["bookings", "list", "--email", "rahim@example.com"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Green Line Scania AC")
                .and(predicate::str::contains("৳3600.00"))
                .and(predicate::str::contains("Rahim Uddin"))
                .and(predicate::str::contains("refunded")),
        );
}

#[tokio::test]
async fn test_list_bookings_json_derives_totals() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bookings"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("bookings/list_bookings.json")),
        )
        .mount(&server)
        .await;

    let output = ticket_cmd_with_base_url(&server.uri())
        .args(["bookings", "list", "--email", "rahim@example.com", "-o", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows[1]["quantity"], 1);
    assert_eq!(rows[1]["total_price"], 700.0);
    assert_eq!(rows[1]["user_label"], "rahim@example.com");
    assert_eq!(rows[2]["user_label"], "N/A");
}

#[test]
fn test_list_bookings_requires_email() {
    ticket_cmd()
        .args(["bookings", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--email"));
}

#[tokio::test]
async fn test_create_booking_posts_pending_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bookings"))
        .and(body_partial_json(serde_json::json!({
            "ticketId": "665f1c2a9b1e4a0012a0b001",
            "quantity": 2,
            "userEmail": "rahim@example.com",
            "status": "pending"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("bookings/create_booking.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    ticket_cmd_with_base_url(&server.uri())
        .args([
            "bookings",
            "create",
            "--ticket-id",
            "665f1c2a9b1e4a0012a0b001",
            "--quantity",
            "2",
            "--email",
            "rahim@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Booking requested: 6660a1b2c3d4e5f601020399",
        ));
}

#[tokio::test]
async fn test_create_booking_with_ticket_details() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tickets/665f1c2a9b1e4a0012a0b001"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("tickets/get_ticket.json")),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/bookings"))
        .and(body_partial_json(serde_json::json!({
            "quantity": 3,
            "price": 1800.0,
            "totalPrice": 5400.0
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("bookings/create_booking.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    ticket_cmd_with_base_url(&server.uri())
        .args([
            "bookings",
            "create",
            "--ticket-id",
            "665f1c2a9b1e4a0012a0b001",
            "--quantity",
            "3",
            "--with-ticket-details",
        ])
        .assert()
        .success();
}

#[test]
fn test_create_booking_rejects_zero_quantity() {
    ticket_cmd()
        .args(["bookings", "create", "--ticket-id", "t1", "--quantity", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--quantity"));
}

#[tokio::test]
async fn test_create_booking_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bookings"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    ticket_cmd_with_base_url(&server.uri())
        .args(["--max-retries", "3", "bookings", "create", "--ticket-id", "t1"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("Failed to create booking"));
}

#[tokio::test]
async fn test_set_status_patches_booking() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/bookings/status/6660a1b2c3d4e5f601020302"))
        .and(body_json(serde_json::json!({ "status": "accepted" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "acknowledged": true,
            "modifiedCount": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    ticket_cmd_with_base_url(&server.uri())
        .args([
            "bookings",
            "set-status",
            "6660a1b2c3d4e5f601020302",
            "accepted",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Booking 6660a1b2c3d4e5f601020302 marked accepted.",
        ));
}
