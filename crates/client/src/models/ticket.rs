//! Ticket models for the marketplace listing endpoints.
//!
//! # What this module handles:
//! - Deserialization of ticket documents returned by `/tickets*` endpoints
//! - The known transport kinds
//!
//! # What this module does NOT handle:
//! - Direct HTTP API calls (see [`crate::endpoints::tickets`])
//! - Availability and presentation rules (see [`crate::view`])

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transport kind of a ticket.
///
/// `All` is only meaningful as a filter value; tickets never carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportType {
    All,
    Bus,
    Train,
    Plane,
    Launch,
}

impl TransportType {
    /// Every known transport value, filter wildcard first.
    pub const ALL: [TransportType; 5] = [
        TransportType::All,
        TransportType::Bus,
        TransportType::Train,
        TransportType::Plane,
        TransportType::Launch,
    ];

    /// Wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            TransportType::All => "all",
            TransportType::Bus => "bus",
            TransportType::Train => "train",
            TransportType::Plane => "plane",
            TransportType::Launch => "launch",
        }
    }

    /// Parse a wire value, returning `None` for unknown kinds.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vendor summary embedded in a ticket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketVendor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// A ticket listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(
        alias = "_id",
        deserialize_with = "crate::serde_helpers::string_from_number_or_string"
    )]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub transport_type: String,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::f64_from_string_or_number"
    )]
    pub price: f64,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::u32_from_string_or_number"
    )]
    pub available_tickets: u32,
    #[serde(default)]
    pub perks: Vec<String>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_datetime_flexible"
    )]
    pub departure: Option<DateTime<Utc>>,
    #[serde(default)]
    pub vendor: Option<TicketVendor>,
}

impl Ticket {
    /// Known transport kind, if the stored value is one.
    pub fn transport(&self) -> Option<TransportType> {
        TransportType::parse(&self.transport_type)
    }
}

/// Envelope returned by `GET /tickets/advertise/current`.
#[derive(Debug, Clone, Deserialize)]
pub struct AdvertisedTicketsResponse {
    #[serde(default)]
    pub data: Vec<Ticket>,
}

/// Error returned when parsing a transport kind that the client does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport type '{0}'")]
pub struct UnknownTransport(pub String);

impl FromStr for TransportType {
    type Err = UnknownTransport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownTransport(s.to_string()))
    }
}
