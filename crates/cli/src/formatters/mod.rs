//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide JSON and table output for tickets, bookings and mutation results.
//! - Implement the `Formatter` trait for each output format.
//!
//! Does NOT handle:
//! - Fetching data (see `commands`).
//!
//! Invariants:
//! - Tables use tab-separation for consistent alignment in standard terminals.
//! - Empty JSON lists render as `[]`; empty tables render a "No X found." line.
//! - Formatters return strings; only [`output_result`] writes to stdout.

use anyhow::Result;
use chrono::{DateTime, Utc};
use ticket_client::{
    BookingRowView, BookingStatus, InsertResult, PaymentVerification, Ticket, TicketCardView,
    TicketQueryParams, UpdateResult, VendorStatusUpdate,
};
use ticket_config::ThemeFlag;

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table", s),
        }
    }
}

/// Renders command results in one output format.
pub trait Formatter {
    fn format_tickets(&self, tickets: &[Ticket], now: DateTime<Utc>) -> Result<String>;

    /// Ticket cards with their resolved style classes.
    fn format_ticket_cards(&self, cards: &[TicketCardView]) -> Result<String>;

    fn format_ticket(&self, ticket: &Ticket, now: DateTime<Utc>) -> Result<String>;

    /// Normalized search parameters, as sent to the backend.
    fn format_query_params(&self, params: &TicketQueryParams) -> Result<String>;

    fn format_bookings(&self, rows: &[BookingRowView]) -> Result<String>;

    fn format_booking_created(&self, result: &InsertResult) -> Result<String>;

    fn format_booking_status(&self, booking_id: &str, status: &BookingStatus) -> Result<String>;

    fn format_vendor_update(
        &self,
        vendor_id: &str,
        update: &VendorStatusUpdate,
        result: &UpdateResult,
    ) -> Result<String>;

    fn format_payment(&self, session_id: &str, verification: &PaymentVerification)
    -> Result<String>;

    /// `(category.variant, class)` pairs of a resolved token bundle.
    fn format_tokens(&self, theme: ThemeFlag, entries: &[(String, &'static str)])
    -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}

/// Write formatted output to stdout.
pub fn output_result(output: &str) {
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}
