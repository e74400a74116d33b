//! Ticket search query building.
//!
//! Responsibilities:
//! - Hold raw user filter input (`TicketFilter`) without rejecting unknown values.
//! - Normalize it into backend query parameters (`TicketQueryParams`).
//! - Produce a canonical cache key for deduplicating identical searches.
//!
//! Does NOT handle:
//! - Sending the request (see [`crate::endpoints::tickets`]).
//! - Caching results (see [`crate::client::cache`]).
//!
//! Invariants:
//! - `build` is pure and total; it never trims or validates text fields.
//! - Transport `all` becomes the empty string; every other value passes through.
//! - Every sort option maps to exactly one `(sortBy, sortOrder)` pair; anything
//!   other than `price-low`/`price-high` sorts newest first.
//! - Equal params give equal cache keys; differing params give differing keys.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::TransportType;

/// Prefix shared by every ticket search cache key.
pub const TICKET_SEARCH_KEY_PREFIX: &str = "tickets?";

/// Everything except RFC 3986 unreserved characters, so key delimiters never
/// appear unescaped inside a value.
const CACHE_KEY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Sort choices offered to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOption {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    Popular,
    Rating,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::Newest,
        SortOption::PriceLow,
        SortOption::PriceHigh,
        SortOption::Popular,
        SortOption::Rating,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SortOption::Newest => "newest",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
            SortOption::Popular => "popular",
            SortOption::Rating => "rating",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.as_str() == raw)
    }

    /// Backend ordering for this option.
    ///
    /// `popular` and `rating` have no backend ordering and fall back to newest first.
    pub const fn ordering(self) -> (SortField, SortOrder) {
        match self {
            SortOption::PriceLow => (SortField::Price, SortOrder::Asc),
            SortOption::PriceHigh => (SortField::Price, SortOrder::Desc),
            SortOption::Newest | SortOption::Popular | SortOption::Rating => {
                (SortField::CreatedAt, SortOrder::Desc)
            }
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a sort option that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort option '{0}'")]
pub struct UnknownSortOption(pub String);

impl FromStr for SortOption {
    type Err = UnknownSortOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownSortOption(s.to_string()))
    }
}

/// Field the backend sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortField {
    #[serde(rename = "price")]
    Price,
    #[serde(rename = "createdAt")]
    CreatedAt,
}

impl SortField {
    pub const fn as_str(self) -> &'static str {
        match self {
            SortField::Price => "price",
            SortField::CreatedAt => "createdAt",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Raw search and sort criteria as entered by a user.
///
/// `transport_type` and `sort_option` stay strings so values this client
/// does not know are still representable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketFilter {
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub from_location: String,
    #[serde(default)]
    pub to_location: String,
    #[serde(default = "default_transport")]
    pub transport_type: String,
    #[serde(default = "default_sort")]
    pub sort_option: String,
}

fn default_transport() -> String {
    TransportType::All.as_str().to_string()
}

fn default_sort() -> String {
    SortOption::default().as_str().to_string()
}

impl Default for TicketFilter {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            from_location: String::new(),
            to_location: String::new(),
            transport_type: default_transport(),
            sort_option: default_sort(),
        }
    }
}

impl TicketFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn from_location(mut self, location: impl Into<String>) -> Self {
        self.from_location = location.into();
        self
    }

    pub fn to_location(mut self, location: impl Into<String>) -> Self {
        self.to_location = location.into();
        self
    }

    pub fn transport(mut self, transport: impl Into<String>) -> Self {
        self.transport_type = transport.into();
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort_option = sort.into();
        self
    }
}

/// Normalized, backend-ready search parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketQueryParams {
    pub search_text: String,
    pub from: String,
    pub to: String,
    pub transport_type: String,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

impl TicketQueryParams {
    /// The six `(name, value)` pairs sent to `GET /tickets`, in fixed order.
    pub fn to_query_pairs(&self) -> [(&'static str, &str); 6] {
        [
            ("searchText", self.search_text.as_str()),
            ("from", self.from.as_str()),
            ("to", self.to.as_str()),
            ("transportType", self.transport_type.as_str()),
            ("sortBy", self.sort_by.as_str()),
            ("sortOrder", self.sort_order.as_str()),
        ]
    }

    /// Canonical cache key for this query.
    pub fn cache_key(&self) -> String {
        let query = self
            .to_query_pairs()
            .iter()
            .map(|(name, value)| {
                format!("{}={}", name, utf8_percent_encode(value, CACHE_KEY_ENCODE_SET))
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("{TICKET_SEARCH_KEY_PREFIX}{query}")
    }
}

impl From<&TicketFilter> for TicketQueryParams {
    fn from(filter: &TicketFilter) -> Self {
        build(filter)
    }
}

/// Normalize a filter into backend query parameters.
pub fn build(filter: &TicketFilter) -> TicketQueryParams {
    let sort = SortOption::parse(&filter.sort_option).unwrap_or_else(|| {
        tracing::debug!(
            sort_option = %filter.sort_option,
            "Unknown sort option, using newest first"
        );
        SortOption::default()
    });
    let (sort_by, sort_order) = sort.ordering();

    let transport_type = if filter.transport_type == TransportType::All.as_str() {
        String::new()
    } else {
        filter.transport_type.clone()
    };

    TicketQueryParams {
        search_text: filter.search_text.clone(),
        from: filter.from_location.clone(),
        to: filter.to_location.clone(),
        transport_type,
        sort_by,
        sort_order,
    }
}
