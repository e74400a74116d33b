//! REST API endpoint implementations.
//!
//! Each function performs one backend call given an HTTP client, base URL,
//! optional bearer token and retry budget. Caching and deduplication are
//! layered on top by [`crate::client::TicketClient`].

mod bookings;
mod payment;
mod request;
mod tickets;
pub mod url_encoding;
mod vendors;

use reqwest::RequestBuilder;

pub use bookings::{create_booking, list_bookings, update_booking_status};
pub use payment::verify_payment;
pub use request::{RetryPolicy, parse_json, send_request_with_retry};
pub use tickets::{advertised_tickets, get_ticket, latest_tickets, search_tickets};
pub use url_encoding::encode_path_segment;
pub use vendors::update_vendor_status;

/// Attach the bearer token, when one is configured.
pub(crate) fn authorize(builder: RequestBuilder, auth_token: Option<&str>) -> RequestBuilder {
    match auth_token {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}
