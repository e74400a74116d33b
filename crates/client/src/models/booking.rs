//! Booking models.
//!
//! # What this module handles:
//! - Deserialization of booking records (user history and vendor requests)
//! - Booking status values, including statuses this client does not know
//! - Request bodies for creating bookings and changing their status
//!
//! # What this module does NOT handle:
//! - Direct HTTP API calls (see [`crate::endpoints::bookings`])
//! - Presentation of bookings (see [`crate::view::BookingRowView`])

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use ticket_config::constants::{DEFAULT_BOOKING_QUANTITY, DEFAULT_MISSING_VALUE};

/// Lifecycle status of a booking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    Paid,
    /// A status string this client does not recognize, kept verbatim.
    Other(String),
}

impl BookingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Accepted => "accepted",
            BookingStatus::Rejected => "rejected",
            BookingStatus::Paid => "paid",
            BookingStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for BookingStatus {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "pending" => BookingStatus::Pending,
            "accepted" => BookingStatus::Accepted,
            "rejected" => BookingStatus::Rejected,
            "paid" => BookingStatus::Paid,
            _ => BookingStatus::Other(raw),
        }
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for BookingStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who made a booking.
///
/// Older records store only the email string; newer ones embed a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookingUser {
    Email(String),
    Profile {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        email: Option<String>,
    },
}

impl BookingUser {
    /// Display name, preferring the profile name over the email.
    pub fn label(&self) -> Option<&str> {
        let label = match self {
            BookingUser::Email(email) => Some(email.as_str()),
            BookingUser::Profile { name, email } => name
                .as_deref()
                .filter(|n| !n.trim().is_empty())
                .or(email.as_deref()),
        };
        label.filter(|label| !label.trim().is_empty())
    }
}

/// A booking as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    #[serde(
        alias = "_id",
        deserialize_with = "crate::serde_helpers::string_from_number_or_string"
    )]
    pub id: String,
    #[serde(default)]
    pub ticket_id: String,
    #[serde(default)]
    pub ticket_title: String,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::f64_from_string_or_number"
    )]
    pub price: f64,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_u32_from_string_or_number"
    )]
    pub quantity: Option<u32>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_f64_from_string_or_number"
    )]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub user: Option<BookingUser>,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_datetime_flexible"
    )]
    pub departure: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image: Option<String>,
}

impl BookingRecord {
    /// Booked quantity; records without one count as a single seat.
    pub fn quantity(&self) -> u32 {
        self.quantity.unwrap_or(DEFAULT_BOOKING_QUANTITY)
    }

    /// Stored total, or unit price times [`Self::quantity`].
    pub fn total_price(&self) -> f64 {
        self.total_price
            .unwrap_or_else(|| self.price * f64::from(self.quantity()))
    }

    pub fn user_label(&self) -> &str {
        self.user
            .as_ref()
            .and_then(BookingUser::label)
            .unwrap_or(DEFAULT_MISSING_VALUE)
    }
}

/// Body of `POST /bookings`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub ticket_id: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub status: BookingStatus,
}

impl NewBooking {
    /// A pending booking request for `quantity` seats.
    pub fn new(ticket_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            ticket_id: ticket_id.into(),
            quantity,
            ticket_title: None,
            price: None,
            total_price: None,
            user_email: None,
            user_name: None,
            status: BookingStatus::Pending,
        }
    }

    /// Copy title and pricing from the ticket being booked.
    pub fn for_ticket(ticket: &super::Ticket, quantity: u32) -> Self {
        Self {
            ticket_title: Some(ticket.title.clone()),
            price: Some(ticket.price),
            total_price: Some(ticket.price * f64::from(quantity)),
            ..Self::new(ticket.id.clone(), quantity)
        }
    }

    pub fn with_user(mut self, email: Option<String>, name: Option<String>) -> Self {
        self.user_email = email;
        self.user_name = name;
        self
    }
}

/// Body of `PATCH /bookings/status/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingStatusUpdate {
    pub status: BookingStatus,
}

/// Acknowledgement of an insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::string_from_number_or_string"
    )]
    pub inserted_id: String,
    #[serde(default = "default_acknowledged")]
    pub acknowledged: bool,
}

fn default_acknowledged() -> bool {
    true
}
