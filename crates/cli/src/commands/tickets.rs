//! Tickets command implementation.
//!
//! Responsibilities:
//! - Search tickets with text, route, transport and sort filters.
//! - List the latest and advertised tickets, and show a single ticket.
//! - Render results as tables, JSON, or themed ticket cards.
//!
//! Does NOT handle:
//! - Filter normalization (see `ticket_client::query`).
//!
//! Invariants:
//! - `--dry-run` prints the normalized query and never contacts the backend.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Subcommand;
use ticket_client::{Ticket, TicketCardView, TicketFilter, query};
use tracing::info;

use crate::dispatch::CommandContext;
use crate::formatters::{get_formatter, output_result};

#[derive(Subcommand)]
pub enum TicketsCommand {
    /// Search tickets
    Search {
        /// Free-text search across ticket titles
        #[arg(long, default_value = "")]
        search: String,

        /// Departure location
        #[arg(long, default_value = "")]
        from: String,

        /// Arrival location
        #[arg(long, default_value = "")]
        to: String,

        /// Transport type (all, bus, train, plane, launch)
        #[arg(long, default_value = "all")]
        transport: String,

        /// Sort order (newest, price-low, price-high, popular, rating)
        #[arg(long, default_value = "newest")]
        sort: String,

        /// Print the normalized query parameters without searching
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Most recently added tickets
    Latest {
        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Tickets currently advertised on the home page
    Advertised {
        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Show one ticket
    Show {
        /// Ticket ID
        id: String,
    },
}

#[derive(clap::Args)]
pub struct DisplayArgs {
    /// Render ticket cards with their theme style classes
    #[arg(long)]
    cards: bool,
}

impl TicketsCommand {
    pub fn is_dry_run(&self) -> bool {
        matches!(self, TicketsCommand::Search { dry_run: true, .. })
    }
}

pub async fn run(command: TicketsCommand, ctx: &CommandContext) -> Result<()> {
    match command {
        TicketsCommand::Search {
            search,
            from,
            to,
            transport,
            sort,
            dry_run,
            display,
        } => {
            let filter = TicketFilter::new()
                .search(search)
                .from_location(from)
                .to_location(to)
                .transport(transport)
                .sort(sort);
            let params = query::build(&filter);

            if dry_run {
                let formatter = get_formatter(ctx.format);
                output_result(&formatter.format_query_params(&params)?);
                return Ok(());
            }

            info!(key = %params.cache_key(), "Searching tickets");
            let client = ctx.client()?;
            let tickets = client
                .search_tickets_with_params(&params)
                .await
                .context("Failed to search tickets")?;
            print_tickets(&tickets, display.cards, ctx)
        }
        TicketsCommand::Latest { display } => {
            info!("Listing latest tickets");
            let client = ctx.client()?;
            let tickets = client
                .latest_tickets()
                .await
                .context("Failed to list latest tickets")?;
            print_tickets(&tickets, display.cards, ctx)
        }
        TicketsCommand::Advertised { display } => {
            info!("Listing advertised tickets");
            let client = ctx.client()?;
            let tickets = client
                .advertised_tickets()
                .await
                .context("Failed to list advertised tickets")?;
            print_tickets(&tickets, display.cards, ctx)
        }
        TicketsCommand::Show { id } => {
            info!(ticket_id = %id, "Fetching ticket");
            let client = ctx.client()?;
            let ticket = client
                .get_ticket(&id)
                .await
                .with_context(|| format!("Failed to fetch ticket '{}'", id))?;
            let formatter = get_formatter(ctx.format);
            output_result(&formatter.format_ticket(&ticket, Utc::now())?);
            Ok(())
        }
    }
}

fn print_tickets(tickets: &[Ticket], cards: bool, ctx: &CommandContext) -> Result<()> {
    let formatter = get_formatter(ctx.format);
    let now = Utc::now();

    let output = if cards {
        let tokens = ctx.theme.tokens();
        let views: Vec<TicketCardView> = tickets
            .iter()
            .map(|t| TicketCardView::new(t, &tokens, now))
            .collect();
        formatter.format_ticket_cards(&views)?
    } else {
        formatter.format_tickets(tickets, now)?
    };

    output_result(&output);
    Ok(())
}
