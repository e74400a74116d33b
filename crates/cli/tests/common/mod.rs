//! Shared test utilities for ticket-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Clear `TICKET_*` variables so host settings never leak into tests.
//!
//! Invariants / Assumptions:
//! - `TICKET_API_TOKEN` is set to "test-token" unless overridden.

#![allow(dead_code)]

use assert_cmd::Command;

pub use ticket_client::testing::load_fixture;

const TICKET_ENV_VARS: &[&str] = &[
    "TICKET_BASE_URL",
    "TICKET_API_TOKEN",
    "TICKET_TIMEOUT",
    "TICKET_MAX_RETRIES",
    "TICKET_SKIP_VERIFY",
    "TICKET_CACHE_TTL",
    "TICKET_CACHE_SIZE",
    "TICKET_CACHE_DISABLED",
    "TICKET_DARK_MODE",
];

/// Returns a hermetic `ticket-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `TICKET_API_TOKEN` is set to a dummy value.
/// - Other `TICKET_*` variables are cleared.
pub fn ticket_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ticket-cli");

    cmd.env("DOTENV_DISABLED", "1");

    for var in TICKET_ENV_VARS {
        cmd.env_remove(var);
    }

    cmd.env("TICKET_API_TOKEN", "test-token");
    cmd
}

/// A hermetic command pointed at `base_url`.
pub fn ticket_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = ticket_cmd();
    cmd.env("TICKET_BASE_URL", base_url);
    cmd
}
