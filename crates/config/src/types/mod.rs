//! Configuration type definitions for the ticket marketplace client.
//!
//! Responsibilities:
//! - Define configuration types for authentication, connections, caching and display.
//! - Define the theme flag and the semantic style token bundle derived from it.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from environment variables (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.
//! - `ThemeFlag` is the only input to style resolution; bundles are never mutated.

mod auth;
pub(crate) mod connection;
mod theme;

pub use auth::AuthConfig;
pub use connection::{CacheConfig, Config, ConnectionConfig, DisplayConfig};
pub use theme::{
    AlertVariant, BackgroundVariant, BadgeVariant, BorderVariant, ButtonVariant, StyleTokenBundle,
    TableVariant, TextVariant, ThemeFlag, resolve,
};
