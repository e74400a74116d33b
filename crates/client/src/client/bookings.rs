//! Booking methods for [`TicketClient`].
//!
//! # What this module handles:
//! - A user's booking history (cached per email)
//! - Creating bookings and changing their status
//!
//! # What this module does NOT handle:
//! - Low-level HTTP calls (in [`crate::endpoints::bookings`])
//!
//! Booking changes alter ticket availability, so every mutation here drops
//! cached ticket and booking queries.

use crate::client::TicketClient;
use crate::client::cache::FetchPolicy;
use crate::endpoints::{self, RetryPolicy, encode_path_segment};
use crate::error::Result;
use crate::models::{BookingRecord, BookingStatus, InsertResult, NewBooking};
use crate::state::QueryState;

/// Cache key prefix of booking queries.
pub const BOOKINGS_KEY_PREFIX: &str = "bookings";

impl TicketClient {
    /// Bookings made by the user with `email`.
    pub async fn list_bookings(&self, email: &str) -> Result<Vec<BookingRecord>> {
        let key = format!("{BOOKINGS_KEY_PREFIX}?email={}", encode_path_segment(email));
        let policy = FetchPolicy::new(self.max_retries);

        self.cache
            .get_or_fetch(
                &key,
                policy,
                endpoints::list_bookings(
                    &self.http,
                    &self.base_url,
                    self.token(),
                    email,
                    self.retry_policy(policy.retries),
                    self.metrics.as_ref(),
                ),
            )
            .await
    }

    pub async fn list_bookings_state(&self, email: &str) -> QueryState<Vec<BookingRecord>> {
        QueryState::from_result(self.list_bookings(email).await)
    }

    /// Request a booking. Never retried.
    pub async fn create_booking(&self, booking: &NewBooking) -> Result<InsertResult> {
        let result = endpoints::create_booking(
            &self.http,
            &self.base_url,
            self.token(),
            booking,
            RetryPolicy::none(),
            self.metrics.as_ref(),
        )
        .await?;

        tracing::info!(
            ticket_id = %booking.ticket_id,
            quantity = booking.quantity,
            inserted_id = %result.inserted_id,
            "Booking created"
        );
        self.invalidate_booking_queries();
        Ok(result)
    }

    /// Change a booking's status (accept, reject, mark paid).
    pub async fn update_booking_status(
        &self,
        booking_id: &str,
        status: &BookingStatus,
    ) -> Result<()> {
        endpoints::update_booking_status(
            &self.http,
            &self.base_url,
            self.token(),
            booking_id,
            status,
            RetryPolicy::none(),
            self.metrics.as_ref(),
        )
        .await?;

        tracing::info!(booking_id, status = %status, "Booking status updated");
        self.invalidate_booking_queries();
        Ok(())
    }

    fn invalidate_booking_queries(&self) {
        self.cache.invalidate_prefix("tickets");
        self.cache.invalidate_prefix(BOOKINGS_KEY_PREFIX);
    }
}
