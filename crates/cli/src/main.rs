//! Ticket CLI - Command-line interface for the ticket marketplace.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute marketplace API commands via the shared client library.
//! - Format and display results as tables or JSON.
//!
//! Does NOT handle:
//! - REST API implementation or caching (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr so stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use std::time::Duration;

use args::Cli;
use clap::Parser;
use dispatch::{CommandContext, run_command};
use error::{ExitCode, ExitCodeExt};
use formatters::OutputFormat;
use ticket_client::{MetricsCollector, MetricsExporter};
use ticket_config::{Config, ConfigLoader, ThemeFlag};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = match OutputFormat::from_str(&cli.output) {
        Ok(format) => format,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(ExitCode::ValidationError.as_i32());
        }
    };

    let metrics_exporter = if let Some(ref bind_addr) = cli.metrics_bind {
        match MetricsExporter::install(bind_addr) {
            Ok(exporter) => {
                tracing::info!("Metrics exporter started on http://{}/metrics", bind_addr);
                Some(exporter)
            }
            Err(e) => {
                eprintln!("Failed to start metrics exporter: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        None
    };

    let config = if cli.command.needs_backend() {
        match load_config(&cli) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("Failed to build configuration: {:#}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        None
    };

    let theme = config
        .as_ref()
        .map(|c| c.display.theme)
        .unwrap_or_else(|| ThemeFlag::new(cli.dark_mode));

    let ctx = CommandContext {
        config,
        format,
        theme,
        metrics: metrics_exporter.as_ref().map(|_| MetricsCollector::new()),
    };

    let exit_code = tokio::select! {
        result = run_command(cli, ctx) => match result {
            Ok(()) => ExitCode::Success,
            Err(e) => {
                eprintln!("{:#}", e);
                e.exit_code()
            }
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!("Operation cancelled by user");
            ExitCode::Interrupted
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Merge environment variables with CLI overrides, CLI taking precedence.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref token) = cli.api_token {
        loader = loader.with_api_token(token.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    if let Some(retries) = cli.max_retries {
        loader = loader.with_max_retries(retries);
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    if cli.dark_mode {
        loader = loader.with_dark_mode(true);
    }

    Ok(loader.build()?)
}
