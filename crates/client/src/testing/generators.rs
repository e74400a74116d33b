//! Ticket data generators using the fake crate.
//!
//! Produces backend-shaped JSON, including the loose typing the backend is
//! known for (numbers as strings, `_id` instead of `id`, missing optionals).

use chrono::{Duration, Utc};
use fake::Fake;
use fake::faker::address::en::CityName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::Name;
use serde_json::{Value, json};

use crate::models::TransportType;

const TRANSPORTS: [TransportType; 4] = [
    TransportType::Bus,
    TransportType::Train,
    TransportType::Plane,
    TransportType::Launch,
];

/// Generates ticket listings as the backend returns them.
///
/// # Example
/// ```ignore
/// let tickets = TicketGenerator::new()
///     .with_count(100)
///     .with_sold_out_percent(20)
///     .generate();
/// ```
#[derive(Debug, Clone)]
pub struct TicketGenerator {
    count: usize,
    sold_out_percent: u8,
    stringly_numbers: bool,
    include_vendor: bool,
}

impl Default for TicketGenerator {
    fn default() -> Self {
        Self {
            count: 10,
            sold_out_percent: 0,
            stringly_numbers: false,
            include_vendor: true,
        }
    }
}

impl TicketGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Share of tickets with zero seats left (0-100).
    pub fn with_sold_out_percent(mut self, percent: u8) -> Self {
        self.sold_out_percent = percent.min(100);
        self
    }

    /// Encode price and seat counts as strings.
    pub fn with_stringly_numbers(mut self, enabled: bool) -> Self {
        self.stringly_numbers = enabled;
        self
    }

    pub fn with_vendor(mut self, include: bool) -> Self {
        self.include_vendor = include;
        self
    }

    /// Generate a JSON array of tickets.
    pub fn generate(&self) -> Value {
        let now = Utc::now();
        let tickets = (0..self.count)
            .map(|i| {
                let transport = TRANSPORTS[i % TRANSPORTS.len()];
                let sold_out = (0u8..100).fake::<u8>() < self.sold_out_percent;
                let available: u32 = if sold_out { 0 } else { (1..60).fake() };
                let price: u32 = (100..5000).fake();
                let departure = now + Duration::hours((1..720).fake::<i64>());

                let mut ticket = json!({
                    "_id": format!("{:024x}", i + 1),
                    "title": format!("{} {}", CityName().fake::<String>(), transport),
                    "from": CityName().fake::<String>(),
                    "to": CityName().fake::<String>(),
                    "transportType": transport.as_str(),
                    "price": self.number(price),
                    "availableTickets": self.number(available),
                    "perks": (0..(0usize..4).fake::<usize>())
                        .map(|_| Word().fake::<String>())
                        .collect::<Vec<_>>(),
                    "departure": departure.to_rfc3339(),
                });

                if self.include_vendor {
                    ticket["vendor"] = json!({
                        "name": Name().fake::<String>(),
                        "email": SafeEmail().fake::<String>(),
                    });
                }
                ticket
            })
            .collect();

        Value::Array(tickets)
    }

    fn number(&self, n: u32) -> Value {
        if self.stringly_numbers {
            Value::String(n.to_string())
        } else {
            Value::from(n)
        }
    }
}
