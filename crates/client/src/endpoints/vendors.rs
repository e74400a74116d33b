//! Vendor approval endpoints.

use reqwest::Client;

use crate::endpoints::{
    RetryPolicy, authorize, encode_path_segment, parse_json, send_request_with_retry,
};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{UpdateResult, VendorStatusUpdate};

/// Change a vendor's approval status.
pub async fn update_vendor_status(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    vendor_id: &str,
    update: &VendorStatusUpdate,
    retry: RetryPolicy,
    metrics: Option<&MetricsCollector>,
) -> Result<UpdateResult> {
    let url = format!("{}/vendors/{}", base_url, encode_path_segment(vendor_id));

    let builder = authorize(client.patch(&url), auth_token).json(update);
    let response =
        send_request_with_retry(builder, retry, "/vendors/{id}", "PATCH", metrics).await?;

    parse_json(response, "/vendors/{id}", metrics).await
}
