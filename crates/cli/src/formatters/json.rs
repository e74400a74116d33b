//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Pretty-print command results as JSON.
//!
//! Invariants:
//! - Tickets keep the backend's camelCase field names and gain an
//!   `availability` object.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use ticket_client::{
    BookingRowView, BookingStatus, InsertResult, PaymentVerification, Ticket, TicketAvailability,
    TicketCardView, TicketQueryParams, UpdateResult, VendorStatusUpdate,
};
use ticket_config::ThemeFlag;

use crate::formatters::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

#[derive(Serialize)]
struct TicketOutput<'a> {
    #[serde(flatten)]
    ticket: &'a Ticket,
    availability: TicketAvailability,
}

impl<'a> TicketOutput<'a> {
    fn new(ticket: &'a Ticket, now: DateTime<Utc>) -> Self {
        Self {
            ticket,
            availability: TicketAvailability::of(ticket, now),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BookingStatusOutput<'a> {
    booking_id: &'a str,
    status: &'a BookingStatus,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VendorUpdateOutput<'a> {
    vendor_id: &'a str,
    #[serde(flatten)]
    update: &'a VendorStatusUpdate,
    #[serde(flatten)]
    result: &'a UpdateResult,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaymentOutput<'a> {
    session_id: &'a str,
    #[serde(flatten)]
    verification: &'a PaymentVerification,
}

#[derive(Serialize)]
struct TokensOutput<'a> {
    theme: ThemeFlag,
    tokens: std::collections::BTreeMap<&'a str, &'static str>,
}

impl Formatter for JsonFormatter {
    fn format_tickets(&self, tickets: &[Ticket], now: DateTime<Utc>) -> Result<String> {
        let output: Vec<TicketOutput<'_>> =
            tickets.iter().map(|t| TicketOutput::new(t, now)).collect();
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_ticket_cards(&self, cards: &[TicketCardView]) -> Result<String> {
        Ok(serde_json::to_string_pretty(cards)?)
    }

    fn format_ticket(&self, ticket: &Ticket, now: DateTime<Utc>) -> Result<String> {
        Ok(serde_json::to_string_pretty(&TicketOutput::new(ticket, now))?)
    }

    fn format_query_params(&self, params: &TicketQueryParams) -> Result<String> {
        Ok(serde_json::to_string_pretty(params)?)
    }

    fn format_bookings(&self, rows: &[BookingRowView]) -> Result<String> {
        Ok(serde_json::to_string_pretty(rows)?)
    }

    fn format_booking_created(&self, result: &InsertResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(result)?)
    }

    fn format_booking_status(&self, booking_id: &str, status: &BookingStatus) -> Result<String> {
        Ok(serde_json::to_string_pretty(&BookingStatusOutput { booking_id, status })?)
    }

    fn format_vendor_update(
        &self,
        vendor_id: &str,
        update: &VendorStatusUpdate,
        result: &UpdateResult,
    ) -> Result<String> {
        Ok(serde_json::to_string_pretty(&VendorUpdateOutput {
            vendor_id,
            update,
            result,
        })?)
    }

    fn format_payment(
        &self,
        session_id: &str,
        verification: &PaymentVerification,
    ) -> Result<String> {
        Ok(serde_json::to_string_pretty(&PaymentOutput {
            session_id,
            verification,
        })?)
    }

    fn format_tokens(
        &self,
        theme: ThemeFlag,
        entries: &[(String, &'static str)],
    ) -> Result<String> {
        let tokens = entries
            .iter()
            .map(|(key, class)| (key.as_str(), *class))
            .collect();
        Ok(serde_json::to_string_pretty(&TokensOutput { theme, tokens })?)
    }
}
