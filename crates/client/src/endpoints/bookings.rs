//! Booking endpoints.

use reqwest::Client;

use crate::endpoints::{
    RetryPolicy, authorize, encode_path_segment, parse_json, send_request_with_retry,
};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{BookingRecord, BookingStatus, BookingStatusUpdate, InsertResult, NewBooking};

/// Bookings made by a user.
pub async fn list_bookings(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    email: &str,
    retry: RetryPolicy,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<BookingRecord>> {
    if email.trim().is_empty() {
        return Err(ClientError::InvalidRequest(
            "an email is required to list bookings".to_string(),
        ));
    }

    let url = format!("{}/bookings", base_url);

    let builder = authorize(client.get(&url), auth_token).query(&[("email", email)]);
    let response = send_request_with_retry(builder, retry, "/bookings", "GET", metrics).await?;

    parse_json(response, "/bookings", metrics).await
}

/// Request a booking.
pub async fn create_booking(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    booking: &NewBooking,
    retry: RetryPolicy,
    metrics: Option<&MetricsCollector>,
) -> Result<InsertResult> {
    if booking.ticket_id.trim().is_empty() {
        return Err(ClientError::InvalidRequest("ticket id is required".to_string()));
    }
    if booking.quantity == 0 {
        return Err(ClientError::InvalidRequest(
            "quantity must be at least 1".to_string(),
        ));
    }

    let url = format!("{}/bookings", base_url);

    let builder = authorize(client.post(&url), auth_token).json(booking);
    let response = send_request_with_retry(builder, retry, "/bookings", "POST", metrics).await?;

    parse_json(response, "/bookings", metrics).await
}

/// Accept, reject or mark a booking paid.
///
/// The backend acknowledgement is not interpreted; any 2xx is success.
pub async fn update_booking_status(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    booking_id: &str,
    status: &BookingStatus,
    retry: RetryPolicy,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    let url = format!(
        "{}/bookings/status/{}",
        base_url,
        encode_path_segment(booking_id)
    );
    let body = BookingStatusUpdate {
        status: status.clone(),
    };

    let builder = authorize(client.patch(&url), auth_token).json(&body);
    send_request_with_retry(builder, retry, "/bookings/status/{id}", "PATCH", metrics).await?;

    Ok(())
}
