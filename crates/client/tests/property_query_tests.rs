//! Property-based tests for ticket query normalization and view derivation.
//!
//! # Invariants
//! - Sort options other than price-low/price-high sort newest first
//! - Transport `all` becomes empty; any other value passes through
//! - Text fields are never trimmed or altered
//! - Cache keys are equal exactly when params are equal
//! - Zero seats means sold out

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use ticket_client::query::{SortField, SortOrder, TICKET_SEARCH_KEY_PREFIX, build};
use ticket_client::{BookingRecord, Ticket, TicketAvailability, TicketFilter};

fn filter_strategy() -> impl Strategy<Value = TicketFilter> {
    (
        ".{0,20}",
        ".{0,12}",
        ".{0,12}",
        prop_oneof![
            Just("all".to_string()),
            Just("bus".to_string()),
            Just("train".to_string()),
            "[a-z]{0,8}",
        ],
        prop_oneof![
            Just("newest".to_string()),
            Just("price-low".to_string()),
            Just("price-high".to_string()),
            Just("popular".to_string()),
            ".{0,10}",
        ],
    )
        .prop_map(|(search, from, to, transport, sort)| {
            TicketFilter::new()
                .search(search)
                .from_location(from)
                .to_location(to)
                .transport(transport)
                .sort(sort)
        })
}

proptest! {
    #[test]
    fn prop_unlisted_sorts_are_newest_first(sort in ".{0,16}") {
        prop_assume!(sort != "price-low" && sort != "price-high");
        let params = build(&TicketFilter::new().sort(sort));
        prop_assert_eq!(params.sort_by, SortField::CreatedAt);
        prop_assert_eq!(params.sort_order, SortOrder::Desc);
    }

    #[test]
    fn prop_transport_passes_through_unless_all(transport in ".{0,12}") {
        let params = build(&TicketFilter::new().transport(transport.clone()));
        if transport == "all" {
            prop_assert_eq!(params.transport_type, "");
        } else {
            prop_assert_eq!(params.transport_type, transport);
        }
    }

    #[test]
    fn prop_text_fields_are_verbatim(filter in filter_strategy()) {
        let params = build(&filter);
        prop_assert_eq!(&params.search_text, &filter.search_text);
        prop_assert_eq!(&params.from, &filter.from_location);
        prop_assert_eq!(&params.to, &filter.to_location);
    }

    #[test]
    fn prop_build_is_deterministic(filter in filter_strategy()) {
        prop_assert_eq!(build(&filter), build(&filter.clone()));
        prop_assert_eq!(build(&filter).cache_key(), build(&filter).cache_key());
    }

    #[test]
    fn prop_cache_key_distinguishes_params(a in filter_strategy(), b in filter_strategy()) {
        let (pa, pb) = (build(&a), build(&b));
        prop_assert_eq!(pa == pb, pa.cache_key() == pb.cache_key());
    }

    #[test]
    fn prop_cache_key_has_fixed_shape(filter in filter_strategy()) {
        let key = build(&filter).cache_key();
        prop_assert!(key.starts_with(TICKET_SEARCH_KEY_PREFIX));
        let query = &key[TICKET_SEARCH_KEY_PREFIX.len()..];
        let names: Vec<&str> = query
            .split('&')
            .map(|pair| pair.split('=').next().unwrap_or_default())
            .collect();
        prop_assert_eq!(
            names,
            vec!["searchText", "from", "to", "transportType", "sortBy", "sortOrder"]
        );
    }

    #[test]
    fn prop_sold_out_iff_no_seats(available in 0u32..5, hours_ahead in 1i64..1000) {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let ticket: Ticket = serde_json::from_value(serde_json::json!({
            "_id": "t",
            "availableTickets": available,
            "departure": (now + chrono::Duration::hours(hours_ahead)).to_rfc3339(),
        }))
        .unwrap();

        let availability = TicketAvailability::of(&ticket, now);
        prop_assert_eq!(availability.sold_out, available == 0);
        prop_assert_eq!(availability.can_book, available > 0);
    }

    #[test]
    fn prop_missing_quantity_totals_unit_price(price in 0u32..100_000) {
        let booking: BookingRecord = serde_json::from_value(serde_json::json!({
            "_id": "b",
            "price": price,
        }))
        .unwrap();

        prop_assert_eq!(booking.quantity(), 1);
        prop_assert_eq!(booking.total_price(), f64::from(price));
    }
}

#[test]
fn test_documented_example() {
    let filter = TicketFilter::new()
        .search("x")
        .from_location("A")
        .to_location("B")
        .transport("bus")
        .sort("price-low");

    let params = serde_json::to_value(build(&filter)).unwrap();

    assert_eq!(
        params,
        serde_json::json!({
            "searchText": "x",
            "from": "A",
            "to": "B",
            "transportType": "bus",
            "sortBy": "price",
            "sortOrder": "asc"
        })
    );
}
