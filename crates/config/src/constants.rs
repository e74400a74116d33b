//! Centralized constants for the ticket marketplace workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Base URL of `Config::default()`. `ConfigLoader::build` never falls back to it.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default number of retries for requests without a specific fetch policy.
pub const DEFAULT_MAX_RETRIES: usize = 0;

/// Base delay for exponential retry backoff in milliseconds.
pub const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 1000;

// =============================================================================
// Configuration Bounds
// =============================================================================

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Maximum allowed retry count.
pub const MAX_MAX_RETRIES: usize = 10;

/// Maximum allowed cache TTL in seconds (24 hours).
pub const MAX_CACHE_TTL_SECS: u64 = 86400;

// =============================================================================
// Query Cache Defaults
// =============================================================================

/// Freshness window for ticket list queries in seconds (5 minutes).
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Default number of cached query results.
pub const DEFAULT_CACHE_SIZE: u64 = 100;

/// Retry count for the advertised tickets query.
pub const ADVERTISED_TICKETS_RETRIES: usize = 2;

// =============================================================================
// Booking Defaults
// =============================================================================

/// Quantity assumed for booking records that do not carry one.
pub const DEFAULT_BOOKING_QUANTITY: u32 = 1;

/// Placeholder rendered for missing values.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";
