//! CLI command implementations.

pub mod bookings;
pub mod payment;
pub mod theme;
pub mod tickets;
pub mod vendors;
