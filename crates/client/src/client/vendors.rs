//! Vendor approval methods for [`TicketClient`].

use crate::client::TicketClient;
use crate::endpoints::{self, RetryPolicy};
use crate::error::Result;
use crate::models::{UpdateResult, VendorStatusUpdate};

impl TicketClient {
    /// Change a vendor's approval status.
    ///
    /// Never retried. Cached ticket queries are dropped since approval changes
    /// which tickets are listed.
    pub async fn update_vendor_status(
        &self,
        vendor_id: &str,
        update: &VendorStatusUpdate,
    ) -> Result<UpdateResult> {
        let result = endpoints::update_vendor_status(
            &self.http,
            &self.base_url,
            self.token(),
            vendor_id,
            update,
            RetryPolicy::none(),
            self.metrics.as_ref(),
        )
        .await?;

        tracing::info!(
            vendor_id,
            status = %update.status,
            modified = result.is_modified(),
            "Vendor status updated"
        );
        self.cache.invalidate_prefix("tickets");
        Ok(result)
    }
}
