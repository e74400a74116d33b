//! Payment confirmation model.
//!
//! The payment provider redirects back with a session id; the backend records
//! the payment and answers with a loosely shaped body. The client only needs
//! to know whether the payment was confirmed.

use serde::{Deserialize, Serialize};

const DEFAULT_FAILURE_REASON: &str = "payment was not confirmed";

/// Outcome of `GET /payment-success?session_id=...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PaymentVerification {
    Success {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        transaction_id: Option<String>,
    },
    Failed {
        reason: String,
    },
}

impl PaymentVerification {
    /// Interpret a 2xx response body.
    ///
    /// Anything but an explicit `"success": false` counts as confirmed,
    /// including empty or non-JSON bodies.
    pub fn from_body(body: &str) -> Self {
        let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
            return Self::Success {
                transaction_id: None,
            };
        };

        if value.get("success").and_then(serde_json::Value::as_bool) == Some(false) {
            let reason = value
                .get("message")
                .or_else(|| value.get("error"))
                .and_then(serde_json::Value::as_str)
                .unwrap_or(DEFAULT_FAILURE_REASON)
                .to_string();
            return Self::Failed { reason };
        }

        let transaction_id = ["transactionId", "paymentIntent", "sessionId"]
            .iter()
            .find_map(|key| value.get(*key).and_then(serde_json::Value::as_str))
            .map(str::to_string);

        Self::Success { transaction_id }
    }

    /// Failure carrying a backend error message.
    pub fn failed(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self::Failed {
            reason: if reason.trim().is_empty() {
                DEFAULT_FAILURE_REASON.to_string()
            } else {
                reason
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
