//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test environment variable handling and precedence.
//! - Test builder validation of URLs, timeouts, retries and cache settings.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads, cleared so host settings cannot leak in.
pub const TICKET_ENV_VARS: &[&str] = &[
    "TICKET_BASE_URL",
    "TICKET_API_TOKEN",
    "TICKET_SKIP_VERIFY",
    "TICKET_TIMEOUT",
    "TICKET_MAX_RETRIES",
    "TICKET_CACHE_TTL",
    "TICKET_CACHE_SIZE",
    "TICKET_CACHE_DISABLED",
    "TICKET_DARK_MODE",
];

/// Run `f` with every loader variable unset except the given overrides.
pub fn with_ticket_env<F: FnOnce()>(overrides: &[(&str, &str)], f: F) {
    let vars: Vec<(&str, Option<&str>)> = TICKET_ENV_VARS
        .iter()
        .map(|key| {
            let value = overrides
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| *v);
            (*key, value)
        })
        .collect();
    temp_env::with_vars(vars, f);
}
