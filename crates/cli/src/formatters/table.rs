//! Table formatter implementation.
//!
//! Responsibilities:
//! - Render command results as tab-separated tables for terminals.
//! - Render ticket cards as labelled blocks with their style classes.
//!
//! Invariants:
//! - Prices use the marketplace currency and two decimals.
//! - Missing values render as `N/A`.

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::fmt::Write;
use ticket_client::view::{departure_label, price_label, route_label};
use ticket_client::{
    BookingRowView, BookingStatus, InsertResult, PaymentVerification, Ticket, TicketAvailability,
    TicketCardView, TicketQueryParams, UpdateResult, VendorStatusUpdate,
};
use ticket_config::ThemeFlag;
use ticket_config::constants::DEFAULT_MISSING_VALUE;

use crate::formatters::Formatter;

/// Table formatter.
pub struct TableFormatter;

fn ticket_row(output: &mut String, ticket: &Ticket, now: DateTime<Utc>) -> Result<()> {
    let availability = TicketAvailability::of(ticket, now);
    writeln!(
        output,
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        ticket.id,
        ticket.title,
        route_label(&ticket.from, &ticket.to),
        ticket.transport_type,
        price_label(ticket.price),
        departure_label(ticket.departure),
        ticket.available_tickets,
        availability.button_label()
    )?;
    Ok(())
}

const TICKET_HEADER: &str = "ID\tTitle\tRoute\tTransport\tPrice\tDeparture\tAvailable\tStatus";

impl Formatter for TableFormatter {
    fn format_tickets(&self, tickets: &[Ticket], now: DateTime<Utc>) -> Result<String> {
        if tickets.is_empty() {
            return Ok("No tickets found.".to_string());
        }

        let mut output = String::new();
        writeln!(output, "{TICKET_HEADER}")?;
        for ticket in tickets {
            ticket_row(&mut output, ticket, now)?;
        }
        Ok(output)
    }

    fn format_ticket_cards(&self, cards: &[TicketCardView]) -> Result<String> {
        if cards.is_empty() {
            return Ok("No tickets found.".to_string());
        }

        let mut output = String::new();
        for (i, card) in cards.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            writeln!(output, "{} [{}]", card.title, card.card_class)?;
            writeln!(output, "  Route: {}", card.route)?;
            writeln!(
                output,
                "  Transport: {} [{}]",
                card.transport_label, card.transport_badge_class
            )?;
            writeln!(output, "  Price: {}", card.price_label)?;
            writeln!(output, "  Departure: {}", card.departure_label)?;
            writeln!(output, "  Available: {}", card.available_tickets)?;
            if !card.perks.is_empty() {
                writeln!(output, "  Perks: {}", card.perks.join(", "))?;
            }
            if let Some(vendor) = &card.vendor {
                writeln!(output, "  Vendor: {} <{}>", vendor.name, vendor.email)?;
            }
            writeln!(
                output,
                "  Button: {} [{}]",
                card.button_label, card.button_class
            )?;
        }
        Ok(output)
    }

    fn format_ticket(&self, ticket: &Ticket, now: DateTime<Utc>) -> Result<String> {
        let availability = TicketAvailability::of(ticket, now);
        let mut output = String::new();

        writeln!(output, "ID: {}", ticket.id)?;
        writeln!(output, "Title: {}", ticket.title)?;
        writeln!(output, "Route: {}", route_label(&ticket.from, &ticket.to))?;
        writeln!(output, "Transport: {}", ticket.transport_type)?;
        writeln!(output, "Price: {}", price_label(ticket.price))?;
        writeln!(output, "Departure: {}", departure_label(ticket.departure))?;
        writeln!(output, "Available: {}", ticket.available_tickets)?;
        if !ticket.perks.is_empty() {
            writeln!(output, "Perks: {}", ticket.perks.join(", "))?;
        }
        let vendor = ticket
            .vendor
            .as_ref()
            .map(|v| format!("{} <{}>", v.name, v.email))
            .unwrap_or_else(|| DEFAULT_MISSING_VALUE.to_string());
        writeln!(output, "Vendor: {}", vendor)?;
        writeln!(output, "Status: {}", availability.button_label())?;
        Ok(output)
    }

    fn format_query_params(&self, params: &TicketQueryParams) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "Parameter\tValue")?;
        for (name, value) in params.to_query_pairs() {
            writeln!(output, "{}\t{}", name, value)?;
        }
        Ok(output)
    }

    fn format_bookings(&self, rows: &[BookingRowView]) -> Result<String> {
        if rows.is_empty() {
            return Ok("No bookings found.".to_string());
        }

        let mut output = String::new();
        writeln!(output, "ID\tTicket\tRoute\tQuantity\tUnit Price\tTotal\tUser\tStatus")?;
        for row in rows {
            writeln!(
                output,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                row.id,
                row.ticket_title,
                row.route.as_deref().unwrap_or(DEFAULT_MISSING_VALUE),
                row.quantity,
                row.unit_price_label,
                row.total_price_label,
                row.user_label,
                row.status
            )?;
        }
        Ok(output)
    }

    fn format_booking_created(&self, result: &InsertResult) -> Result<String> {
        Ok(format!("Booking requested: {}", result.inserted_id))
    }

    fn format_booking_status(&self, booking_id: &str, status: &BookingStatus) -> Result<String> {
        Ok(format!("Booking {} marked {}.", booking_id, status))
    }

    fn format_vendor_update(
        &self,
        vendor_id: &str,
        update: &VendorStatusUpdate,
        result: &UpdateResult,
    ) -> Result<String> {
        if result.is_modified() {
            Ok(format!("Vendor {} marked {}.", vendor_id, update.status))
        } else {
            Ok(format!(
                "Vendor {} unchanged (matched {}).",
                vendor_id, result.matched_count
            ))
        }
    }

    fn format_payment(
        &self,
        session_id: &str,
        verification: &PaymentVerification,
    ) -> Result<String> {
        match verification {
            PaymentVerification::Success { transaction_id } => Ok(format!(
                "Payment confirmed for session {} (transaction: {}).",
                session_id,
                transaction_id.as_deref().unwrap_or(DEFAULT_MISSING_VALUE)
            )),
            PaymentVerification::Failed { reason } => Ok(format!(
                "Payment not confirmed for session {}: {}",
                session_id, reason
            )),
        }
    }

    fn format_tokens(
        &self,
        theme: ThemeFlag,
        entries: &[(String, &'static str)],
    ) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "Theme: {}", theme)?;
        writeln!(output, "Token\tClass")?;
        for (key, class) in entries {
            writeln!(output, "{}\t{}", key, class)?;
        }
        Ok(output)
    }
}
