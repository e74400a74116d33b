//! Payment confirmation endpoint.

use reqwest::Client;

use crate::endpoints::{RetryPolicy, authorize, send_request_with_retry};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::PaymentVerification;

/// Confirm a payment session with the backend.
///
/// HTTP-level rejections become [`PaymentVerification::Failed`]; transport
/// and authentication failures are returned as errors.
pub async fn verify_payment(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    session_id: &str,
    retry: RetryPolicy,
    metrics: Option<&MetricsCollector>,
) -> Result<PaymentVerification> {
    if session_id.trim().is_empty() {
        return Err(ClientError::InvalidRequest(
            "a payment session id is required".to_string(),
        ));
    }

    let url = format!("{}/payment-success", base_url);

    let builder = authorize(client.get(&url), auth_token).query(&[("session_id", session_id)]);
    match send_request_with_retry(builder, retry, "/payment-success", "GET", metrics).await {
        Ok(response) => {
            let body = response.text().await?;
            Ok(PaymentVerification::from_body(&body))
        }
        Err(ClientError::ApiError { message, .. }) => Ok(PaymentVerification::failed(message)),
        Err(ClientError::NotFound(_)) => Ok(PaymentVerification::failed("payment session not found")),
        Err(e) => Err(e),
    }
}
