//! Payment confirmation for [`TicketClient`].

use crate::client::TicketClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::PaymentVerification;

impl TicketClient {
    /// Confirm a checkout session after the payment provider redirects back.
    ///
    /// A successful payment marks a booking paid, so cached booking queries
    /// are dropped.
    pub async fn verify_payment(&self, session_id: &str) -> Result<PaymentVerification> {
        let verification = endpoints::verify_payment(
            &self.http,
            &self.base_url,
            self.token(),
            session_id,
            self.default_retry(),
            self.metrics.as_ref(),
        )
        .await?;

        if verification.is_success() {
            self.cache.invalidate_prefix("bookings");
        } else {
            tracing::warn!(session_id, "Payment was not confirmed");
        }
        Ok(verification)
    }
}
