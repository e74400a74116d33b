//! Configuration management for the ticket marketplace client.
//!
//! This crate provides types and loaders for managing backend connection
//! configuration from environment variables, plus the theme flag and the
//! style token resolver shared by every presentation surface.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{
    AlertVariant, AuthConfig, BackgroundVariant, BadgeVariant, BorderVariant, ButtonVariant,
    CacheConfig, Config, ConnectionConfig, DisplayConfig, StyleTokenBundle, TableVariant,
    TextVariant, ThemeFlag, resolve,
};
