//! Data models for ticket marketplace API responses.
//!
//! This module provides types for deserializing backend responses and
//! serializing request bodies. Types are organized by resource in submodules
//! and re-exported here for convenient access.

pub mod booking;
pub mod payment;
pub mod ticket;
pub mod vendor;

pub use booking::{
    BookingRecord, BookingStatus, BookingStatusUpdate, BookingUser, InsertResult, NewBooking,
};
pub use payment::PaymentVerification;
pub use ticket::{AdvertisedTicketsResponse, Ticket, TicketVendor, TransportType, UnknownTransport};
pub use vendor::{UpdateResult, VendorStatus, VendorStatusUpdate};
