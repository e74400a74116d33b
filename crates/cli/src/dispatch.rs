//! Command dispatch logic for the CLI.
//!
//! Responsibilities:
//! - Route parsed CLI commands to their implementations.
//! - Hand each command its configuration, output format and theme.
//!
//! Does NOT handle:
//! - Argument parsing (see `args` module).
//! - Configuration loading (see `main`).

use anyhow::Result;
use ticket_client::{MetricsCollector, TicketClient};
use ticket_config::{Config, ThemeFlag};

use crate::args::{Cli, Commands};
use crate::commands;
use crate::formatters::OutputFormat;

/// Everything a command needs besides its own arguments.
pub struct CommandContext {
    /// Present for every command that reaches the backend.
    pub config: Option<Config>,
    pub format: OutputFormat,
    pub theme: ThemeFlag,
    /// Set when `--metrics-bind` installed an exporter.
    pub metrics: Option<MetricsCollector>,
}

impl CommandContext {
    /// The loaded configuration, or an error naming what is missing.
    pub fn config(&self) -> Result<&Config> {
        self.config
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("This command requires a backend configuration"))
    }

    /// Build a client from the loaded configuration.
    pub fn client(&self) -> Result<TicketClient> {
        let mut builder = TicketClient::builder().from_config(self.config()?);
        if let Some(metrics) = &self.metrics {
            builder = builder.metrics(metrics.clone());
        }
        Ok(builder.build()?)
    }
}

pub async fn run_command(cli: Cli, ctx: CommandContext) -> Result<()> {
    match cli.command {
        Commands::Tickets { command } => commands::tickets::run(command, &ctx).await?,
        Commands::Bookings { command } => commands::bookings::run(command, &ctx).await?,
        Commands::Vendors { command } => commands::vendors::run(command, &ctx).await?,
        Commands::Payment { command } => commands::payment::run(command, &ctx).await?,
        Commands::Theme { command } => commands::theme::run(command, &ctx)?,
    }
    Ok(())
}
