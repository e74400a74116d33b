//! Presentation-ready views of tickets and bookings.
//!
//! Responsibilities:
//! - Derive availability (sold out, departed, bookable) from a ticket.
//! - Pair ticket and booking fields with style classes from a
//!   [`StyleTokenBundle`] so every surface renders them the same way.
//!
//! Does NOT handle:
//! - Fetching data or resolving the theme flag.
//!
//! Invariants:
//! - Views are pure functions of their inputs and the supplied `now`.
//! - Missing optional fields render as their documented fallbacks, never fail.

use chrono::{DateTime, Utc};
use serde::Serialize;
use ticket_config::constants::DEFAULT_MISSING_VALUE;
use ticket_config::{
    BackgroundVariant, BadgeVariant, BorderVariant, ButtonVariant, StyleTokenBundle, TextVariant,
};

use crate::models::{BookingRecord, BookingStatus, Ticket, TicketVendor, TransportType, VendorStatus};

/// Currency prefix for price labels.
pub const CURRENCY_SYMBOL: &str = "৳";

const DEPARTURE_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Whether a ticket can still be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TicketAvailability {
    pub sold_out: bool,
    pub departed: bool,
    pub can_book: bool,
}

impl TicketAvailability {
    pub fn of(ticket: &Ticket, now: DateTime<Utc>) -> Self {
        let sold_out = ticket.available_tickets == 0;
        let departed = ticket.departure.is_some_and(|departure| departure <= now);
        Self {
            sold_out,
            departed,
            can_book: !sold_out && !departed,
        }
    }

    /// Label of the booking button.
    pub fn button_label(&self) -> &'static str {
        if self.sold_out {
            "Sold Out"
        } else if self.departed {
            "Departed"
        } else {
            "Book Now"
        }
    }
}

/// Format a price with the marketplace currency.
pub fn price_label(price: f64) -> String {
    format!("{CURRENCY_SYMBOL}{price:.2}")
}

/// `"A → B"` route label.
pub fn route_label(from: &str, to: &str) -> String {
    format!("{from} → {to}")
}

pub fn departure_label(departure: Option<DateTime<Utc>>) -> String {
    departure
        .map(|d| d.format(DEPARTURE_FORMAT).to_string())
        .unwrap_or_else(|| DEFAULT_MISSING_VALUE.to_string())
}

/// Badge variant for a transport kind.
pub fn transport_badge(transport_type: &str) -> BadgeVariant {
    match TransportType::parse(transport_type) {
        Some(TransportType::Bus) => BadgeVariant::Success,
        Some(TransportType::Train) => BadgeVariant::Info,
        Some(TransportType::Plane) => BadgeVariant::Primary,
        Some(TransportType::Launch) => BadgeVariant::Warning,
        Some(TransportType::All) | None => BadgeVariant::Default,
    }
}

pub fn booking_status_badge(status: &BookingStatus) -> BadgeVariant {
    match status {
        BookingStatus::Pending => BadgeVariant::Warning,
        BookingStatus::Accepted => BadgeVariant::Success,
        BookingStatus::Rejected => BadgeVariant::Error,
        BookingStatus::Paid => BadgeVariant::Info,
        BookingStatus::Other(_) => BadgeVariant::Default,
    }
}

pub fn vendor_status_badge(status: &VendorStatus) -> BadgeVariant {
    match status {
        VendorStatus::Approved => BadgeVariant::Success,
        VendorStatus::Rejected | VendorStatus::Fraud => BadgeVariant::Error,
        VendorStatus::Pending => BadgeVariant::Warning,
        VendorStatus::Other(_) => BadgeVariant::Default,
    }
}

/// Vendor block of a ticket card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorView {
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub text_class: &'static str,
}

impl VendorView {
    fn new(vendor: &TicketVendor, tokens: &StyleTokenBundle) -> Self {
        Self {
            name: vendor.name.clone(),
            email: vendor.email.clone(),
            image: vendor.image.clone(),
            text_class: tokens.text(TextVariant::Secondary),
        }
    }
}

/// Everything a ticket card needs to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketCardView {
    pub id: String,
    pub title: String,
    pub image: Option<String>,
    pub route: String,
    pub transport_label: String,
    pub price_label: String,
    pub departure_label: String,
    pub available_tickets: u32,
    pub availability: TicketAvailability,
    pub perks: Vec<String>,
    pub vendor: Option<VendorView>,
    pub card_class: &'static str,
    pub border_class: &'static str,
    pub title_class: &'static str,
    pub muted_class: &'static str,
    pub transport_badge_class: &'static str,
    pub button_class: &'static str,
    pub button_label: &'static str,
}

impl TicketCardView {
    pub fn new(ticket: &Ticket, tokens: &StyleTokenBundle, now: DateTime<Utc>) -> Self {
        let availability = TicketAvailability::of(ticket, now);
        let button = if availability.can_book {
            ButtonVariant::Primary
        } else {
            ButtonVariant::Ghost
        };
        let transport_label = ticket
            .transport()
            .map(|t| t.as_str().to_string())
            .unwrap_or_else(|| ticket.transport_type.clone());

        Self {
            id: ticket.id.clone(),
            title: ticket.title.clone(),
            image: ticket.image.clone(),
            route: route_label(&ticket.from, &ticket.to),
            transport_label,
            price_label: price_label(ticket.price),
            departure_label: departure_label(ticket.departure),
            available_tickets: ticket.available_tickets,
            availability,
            perks: ticket.perks.clone(),
            vendor: ticket.vendor.as_ref().map(|v| VendorView::new(v, tokens)),
            card_class: tokens.background(BackgroundVariant::Card),
            border_class: tokens.border(BorderVariant::Primary),
            title_class: tokens.text(TextVariant::Primary),
            muted_class: tokens.text(TextVariant::Muted),
            transport_badge_class: tokens.badge(transport_badge(&ticket.transport_type)),
            button_class: tokens.button(button),
            button_label: availability.button_label(),
        }
    }
}

/// One row of a booking table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRowView {
    pub id: String,
    pub ticket_title: String,
    pub route: Option<String>,
    pub quantity: u32,
    pub unit_price_label: String,
    pub total_price: f64,
    pub total_price_label: String,
    pub user_label: String,
    pub status: String,
    pub status_badge_class: &'static str,
}

impl BookingRowView {
    pub fn new(booking: &BookingRecord, tokens: &StyleTokenBundle) -> Self {
        let route = match (&booking.from, &booking.to) {
            (Some(from), Some(to)) => Some(route_label(from, to)),
            _ => None,
        };
        let total_price = booking.total_price();

        Self {
            id: booking.id.clone(),
            ticket_title: booking.ticket_title.clone(),
            route,
            quantity: booking.quantity(),
            unit_price_label: price_label(booking.price),
            total_price,
            total_price_label: price_label(total_price),
            user_label: booking.user_label().to_string(),
            status: booking.status.to_string(),
            status_badge_class: tokens.badge(booking_status_badge(&booking.status)),
        }
    }
}
