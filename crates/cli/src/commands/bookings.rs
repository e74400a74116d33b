//! Bookings command implementation.
//!
//! Responsibilities:
//! - List a user's bookings.
//! - Request a booking for a ticket.
//! - Accept, reject or mark bookings paid.
//!
//! Invariants:
//! - Mutations are sent once; a failed request is reported, never replayed.

use anyhow::{Context, Result};
use clap::Subcommand;
use ticket_client::{BookingRowView, BookingStatus, NewBooking};
use tracing::info;

use crate::dispatch::CommandContext;
use crate::formatters::{get_formatter, output_result};

#[derive(Subcommand)]
pub enum BookingsCommand {
    /// List bookings made by a user
    List {
        /// Email of the user whose bookings to list
        #[arg(long)]
        email: String,
    },

    /// Request a booking
    Create {
        /// Ticket to book
        #[arg(long)]
        ticket_id: String,

        /// Number of seats
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,

        /// Email of the booking user
        #[arg(long)]
        email: Option<String>,

        /// Display name of the booking user
        #[arg(long)]
        name: Option<String>,

        /// Copy title and price from the ticket before booking
        #[arg(long)]
        with_ticket_details: bool,
    },

    /// Change a booking's status (pending, accepted, rejected, paid)
    SetStatus {
        /// Booking ID
        id: String,

        /// New status
        status: BookingStatus,
    },
}

pub async fn run(command: BookingsCommand, ctx: &CommandContext) -> Result<()> {
    let client = ctx.client()?;
    let formatter = get_formatter(ctx.format);

    match command {
        BookingsCommand::List { email } => {
            info!("Listing bookings");
            let bookings = client
                .list_bookings(&email)
                .await
                .context("Failed to list bookings")?;

            let tokens = ctx.theme.tokens();
            let rows: Vec<BookingRowView> = bookings
                .iter()
                .map(|b| BookingRowView::new(b, &tokens))
                .collect();
            output_result(&formatter.format_bookings(&rows)?);
        }
        BookingsCommand::Create {
            ticket_id,
            quantity,
            email,
            name,
            with_ticket_details,
        } => {
            let booking = if with_ticket_details {
                let ticket = client
                    .get_ticket(&ticket_id)
                    .await
                    .with_context(|| format!("Failed to fetch ticket '{}'", ticket_id))?;
                NewBooking::for_ticket(&ticket, quantity)
            } else {
                NewBooking::new(ticket_id, quantity)
            };
            let booking = booking.with_user(email, name);

            let result = client
                .create_booking(&booking)
                .await
                .context("Failed to create booking")?;
            output_result(&formatter.format_booking_created(&result)?);
        }
        BookingsCommand::SetStatus { id, status } => {
            client
                .update_booking_status(&id, &status)
                .await
                .with_context(|| format!("Failed to update booking '{}'", id))?;
            output_result(&formatter.format_booking_status(&id, &status)?);
        }
    }

    Ok(())
}
