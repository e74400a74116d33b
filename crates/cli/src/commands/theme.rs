//! Theme command implementation.
//!
//! Prints the style token bundle resolved from the dark/light flag, either
//! in full or for a single `category.variant` key.

use anyhow::Result;
use clap::Subcommand;

use crate::dispatch::CommandContext;
use crate::formatters::{get_formatter, output_result};

#[derive(Subcommand)]
pub enum ThemeCommand {
    /// Print resolved style tokens
    Tokens {
        /// Only print this token (e.g., button.primary); unknown keys fall back
        #[arg(long, value_name = "CATEGORY.VARIANT")]
        key: Option<String>,
    },
}

pub fn run(command: ThemeCommand, ctx: &CommandContext) -> Result<()> {
    match command {
        ThemeCommand::Tokens { key } => {
            let tokens = ctx.theme.tokens();
            let entries = match key {
                Some(key) => {
                    let class = tokens.get(&key);
                    vec![(key, class)]
                }
                None => tokens.entries(),
            };

            let formatter = get_formatter(ctx.format);
            output_result(&formatter.format_tokens(ctx.theme, &entries)?);
        }
    }
    Ok(())
}
