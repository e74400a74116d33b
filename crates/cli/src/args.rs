//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and `TICKET_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate configuration (see `ticket_config::ConfigLoader`).

use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "ticket-cli")]
#[command(about = "Ticket CLI - Browse tickets and manage bookings from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  ticket-cli tickets search --from Dhaka --to Sylhet --transport bus --sort price-low\n  ticket-cli tickets latest --output json\n  ticket-cli bookings list --email user@example.com\n  ticket-cli payment verify cs_test_a1b2c3\n  ticket-cli --dark-mode theme tokens --key button.primary\n"
)]
pub struct Cli {
    /// Base URL of the marketplace backend (e.g., https://api.example.com)
    #[arg(short, long, global = true, env = "TICKET_BASE_URL")]
    pub base_url: Option<String>,

    /// Bearer token sent with every request
    #[arg(short, long, global = true, env = "TICKET_API_TOKEN")]
    pub api_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "TICKET_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Retries for requests without a query-specific policy
    #[arg(long, global = true, env = "TICKET_MAX_RETRIES")]
    pub max_retries: Option<usize>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "TICKET_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Render style tokens for the dark theme
    #[arg(long, global = true, env = "TICKET_DARK_MODE")]
    pub dark_mode: bool,

    /// Output format (json, table)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Serve Prometheus metrics on this address (e.g., 127.0.0.1:9090)
    #[arg(long, global = true, value_name = "ADDR")]
    pub metrics_bind: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search and browse tickets
    Tickets {
        #[command(subcommand)]
        command: commands::tickets::TicketsCommand,
    },

    /// List, request and review bookings
    Bookings {
        #[command(subcommand)]
        command: commands::bookings::BookingsCommand,
    },

    /// Review vendor accounts
    Vendors {
        #[command(subcommand)]
        command: commands::vendors::VendorsCommand,
    },

    /// Confirm payments returned by the payment provider
    Payment {
        #[command(subcommand)]
        command: commands::payment::PaymentCommand,
    },

    /// Inspect the resolved style tokens
    Theme {
        #[command(subcommand)]
        command: commands::theme::ThemeCommand,
    },
}

impl Commands {
    /// Whether the command talks to the backend and so needs a full configuration.
    pub fn needs_backend(&self) -> bool {
        match self {
            Commands::Theme { .. } => false,
            Commands::Tickets { command } => !command.is_dry_run(),
            _ => true,
        }
    }
}
