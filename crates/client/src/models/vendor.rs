//! Vendor approval models.
//!
//! # What this module handles:
//! - Vendor approval status values used by the admin workflow
//! - The `PATCH /vendors/{id}` request body and its update acknowledgement

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Approval status of a vendor account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VendorStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    /// Vendor flagged as fraudulent; their tickets are hidden.
    Fraud,
    /// A status string this client does not recognize, kept verbatim.
    Other(String),
}

impl VendorStatus {
    pub fn as_str(&self) -> &str {
        match self {
            VendorStatus::Pending => "pending",
            VendorStatus::Approved => "approved",
            VendorStatus::Rejected => "rejected",
            VendorStatus::Fraud => "fraud",
            VendorStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for VendorStatus {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "pending" => VendorStatus::Pending,
            "approved" => VendorStatus::Approved,
            "rejected" => VendorStatus::Rejected,
            "fraud" => VendorStatus::Fraud,
            _ => VendorStatus::Other(raw),
        }
    }
}

impl From<VendorStatus> for String {
    fn from(status: VendorStatus) -> Self {
        match status {
            VendorStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for VendorStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl fmt::Display for VendorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `PATCH /vendors/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorStatusUpdate {
    pub status: VendorStatus,
    pub email: String,
}

/// Acknowledgement of an update, as reported by the backend's document store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::u64_from_string_or_number"
    )]
    pub matched_count: u64,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::u64_from_string_or_number"
    )]
    pub modified_count: u64,
}

impl UpdateResult {
    /// Whether the update changed at least one document.
    pub fn is_modified(&self) -> bool {
        self.modified_count > 0
    }
}
