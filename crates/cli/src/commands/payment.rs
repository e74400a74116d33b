//! Payment command implementation.
//!
//! Responsibilities:
//! - Confirm a payment session with the backend after checkout.
//!
//! Invariants:
//! - An unconfirmed payment is printed and then reported as a failure so
//!   scripts see a non-zero exit code.

use anyhow::{Context, Result};
use clap::Subcommand;
use ticket_client::PaymentVerification;

use crate::dispatch::CommandContext;
use crate::formatters::{get_formatter, output_result};

#[derive(Subcommand)]
pub enum PaymentCommand {
    /// Confirm a checkout session
    Verify {
        /// Session ID returned by the payment provider
        session_id: String,
    },
}

pub async fn run(command: PaymentCommand, ctx: &CommandContext) -> Result<()> {
    match command {
        PaymentCommand::Verify { session_id } => {
            let client = ctx.client()?;
            let verification = client
                .verify_payment(&session_id)
                .await
                .context("Failed to verify payment")?;

            let formatter = get_formatter(ctx.format);
            output_result(&formatter.format_payment(&session_id, &verification)?);

            if let PaymentVerification::Failed { reason } = verification {
                anyhow::bail!("Payment was not confirmed: {}", reason);
            }
        }
    }
    Ok(())
}
