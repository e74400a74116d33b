//! Testing utilities for marketplace client tests.
//!
//! This module provides helper functions for loading test fixtures and
//! generating ticket data. Available when running tests or when the
//! `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use ticket_client::testing::{load_fixture, generators::TicketGenerator};
//!
//! let fixture = load_fixture("tickets/search_tickets.json");
//! let tickets = TicketGenerator::new().with_count(50).generate();
//! ```

#[cfg(feature = "test-utils")]
pub mod generators;

use std::path::Path;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "tickets/latest_tickets.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}
