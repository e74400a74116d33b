//! Ticket marketplace REST API client.
//!
//! This crate provides a type-safe client for the marketplace backend: ticket
//! search and listings, bookings, vendor approval and payment confirmation.
//! Read queries are cached in memory and identical concurrent reads share a
//! single request.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;
pub mod query;
mod serde_helpers;
pub mod state;
pub mod view;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::TicketClient;
pub use client::builder::TicketClientBuilder;
pub use client::cache::{CacheStats, FetchPolicy, QueryCache};
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use models::{
    BookingRecord, BookingStatus, BookingUser, InsertResult, NewBooking, PaymentVerification,
    Ticket, TicketVendor, TransportType, UpdateResult, VendorStatus, VendorStatusUpdate,
};
pub use query::{SortField, SortOption, SortOrder, TicketFilter, TicketQueryParams};
pub use state::{QueryError, QueryState, QueryStatus};
pub use view::{BookingRowView, TicketAvailability, TicketCardView};
