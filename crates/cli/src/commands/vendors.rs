//! Vendors command implementation.

use anyhow::{Context, Result};
use clap::Subcommand;
use ticket_client::{VendorStatus, VendorStatusUpdate};

use crate::dispatch::CommandContext;
use crate::formatters::{get_formatter, output_result};

#[derive(Subcommand)]
pub enum VendorsCommand {
    /// Change a vendor's approval status (pending, approved, rejected, fraud)
    SetStatus {
        /// Vendor ID
        id: String,

        /// New approval status
        #[arg(long)]
        status: VendorStatus,

        /// Vendor account email
        #[arg(long)]
        email: String,
    },
}

pub async fn run(command: VendorsCommand, ctx: &CommandContext) -> Result<()> {
    match command {
        VendorsCommand::SetStatus { id, status, email } => {
            let client = ctx.client()?;
            let update = VendorStatusUpdate { status, email };

            let result = client
                .update_vendor_status(&id, &update)
                .await
                .with_context(|| format!("Failed to update vendor '{}'", id))?;

            let formatter = get_formatter(ctx.format);
            output_result(&formatter.format_vendor_update(&id, &update, &result)?);
        }
    }
    Ok(())
}
