//! Serde helpers for the backend's loosely typed JSON.
//!
//! Responsibilities:
//! - Provide deserializers that accept either JSON numbers or strings for numeric fields.
//! - Accept the several timestamp shapes the backend stores for departures.
//! - Keep parsing behavior centralized so model definitions stay readable and consistent.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, required/optional business rules).
//! - Normalizing currencies or time zones beyond treating naive timestamps as UTC.
//!
//! Invariants / assumptions:
//! - Form-backed records may carry `"120"` strings where numbers are expected.
//! - Departure times may be RFC 3339, naive `YYYY-MM-DDTHH:MM[:SS]` or epoch milliseconds.
//! - These helpers must not log or print record contents; errors are generic parse errors.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
    F64(f64),
}

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

fn parse_f64<E: serde::de::Error>(value: StringOrNumber) -> Result<f64, E> {
    match value {
        StringOrNumber::String(s) => s.trim().parse::<f64>().map_err(E::custom),
        StringOrNumber::U64(v) => Ok(v as f64),
        StringOrNumber::I64(v) => Ok(v as f64),
        StringOrNumber::F64(v) => Ok(v),
    }
}

fn parse_u32<E: serde::de::Error>(value: StringOrNumber) -> Result<u32, E> {
    match value {
        StringOrNumber::String(s) => s.trim().parse::<u32>().map_err(E::custom),
        StringOrNumber::U64(v) => u32::try_from(v).map_err(E::custom),
        StringOrNumber::I64(v) => u32::try_from(v).map_err(E::custom),
        StringOrNumber::F64(v) if v >= 0.0 && v.fract() == 0.0 && v <= f64::from(u32::MAX) => {
            Ok(v as u32)
        }
        StringOrNumber::F64(v) => Err(E::custom(format!("expected a whole count, got {v}"))),
    }
}

pub fn f64_from_string_or_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    parse_f64(StringOrNumber::deserialize(deserializer)?)
}

pub fn opt_f64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<StringOrNumber>::deserialize(deserializer)?
        .map(parse_f64)
        .transpose()
}

pub fn u32_from_string_or_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    parse_u32(StringOrNumber::deserialize(deserializer)?)
}

pub fn opt_u32_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<StringOrNumber>::deserialize(deserializer)?
        .map(parse_u32)
        .transpose()
}

pub fn u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s.trim().parse::<u64>().map_err(D::Error::custom),
        StringOrNumber::U64(v) => Ok(v),
        StringOrNumber::I64(v) => u64::try_from(v).map_err(D::Error::custom),
        StringOrNumber::F64(v) => Err(D::Error::custom(format!("expected an integer, got {v}"))),
    }
}

pub fn string_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = StringOrNumber::deserialize(deserializer)?;
    match value {
        StringOrNumber::String(s) => Ok(s),
        StringOrNumber::U64(v) => Ok(v.to_string()),
        StringOrNumber::I64(v) => Ok(v.to_string()),
        StringOrNumber::F64(v) => Ok(v.to_string()),
    }
}

/// Parse a timestamp string in any of the accepted shapes.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

pub fn opt_datetime_flexible<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrNumber::String(s)) if s.trim().is_empty() => Ok(None),
        Some(StringOrNumber::String(s)) => parse_timestamp(&s)
            .map(Some)
            .ok_or_else(|| D::Error::custom("unrecognized timestamp format")),
        Some(StringOrNumber::U64(ms)) => i64::try_from(ms)
            .ok()
            .and_then(DateTime::from_timestamp_millis)
            .map(Some)
            .ok_or_else(|| D::Error::custom("timestamp out of range")),
        Some(StringOrNumber::I64(ms)) => DateTime::from_timestamp_millis(ms)
            .map(Some)
            .ok_or_else(|| D::Error::custom("timestamp out of range")),
        Some(StringOrNumber::F64(ms)) => DateTime::from_timestamp_millis(ms as i64)
            .map(Some)
            .ok_or_else(|| D::Error::custom("timestamp out of range")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Deserialize)]
    struct Price {
        #[serde(deserialize_with = "f64_from_string_or_number")]
        value: f64,
    }

    #[derive(Deserialize)]
    struct Count {
        #[serde(default, deserialize_with = "opt_u32_from_string_or_number")]
        value: Option<u32>,
    }

    #[derive(Deserialize)]
    struct When {
        #[serde(default, deserialize_with = "opt_datetime_flexible")]
        value: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_f64_from_string_or_number_accepts_both() {
        let parsed: Price = serde_json::from_str(r#"{ "value": 450 }"#).unwrap();
        assert_eq!(parsed.value, 450.0);

        let parsed: Price = serde_json::from_str(r#"{ "value": "450.5" }"#).unwrap();
        assert_eq!(parsed.value, 450.5);
    }

    #[test]
    fn test_f64_from_string_rejects_garbage() {
        let parsed = serde_json::from_str::<Price>(r#"{ "value": "cheap" }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_opt_u32_accepts_null_missing_and_string() {
        let parsed: Count = serde_json::from_str(r#"{ "value": null }"#).unwrap();
        assert_eq!(parsed.value, None);

        let parsed: Count = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(parsed.value, None);

        let parsed: Count = serde_json::from_str(r#"{ "value": "3" }"#).unwrap();
        assert_eq!(parsed.value, Some(3));
    }

    #[test]
    fn test_u32_rejects_negative_and_fractional() {
        assert!(serde_json::from_str::<Count>(r#"{ "value": -1 }"#).is_err());
        assert!(serde_json::from_str::<Count>(r#"{ "value": 1.5 }"#).is_err());
    }

    #[test]
    fn test_string_from_number_or_string_accepts_number() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(deserialize_with = "string_from_number_or_string")]
            value: String,
        }

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": 3 }"#).unwrap();
        assert_eq!(parsed.value, "3");
    }

    #[test]
    fn test_datetime_accepts_rfc3339_naive_and_millis() {
        let expected = Utc.with_ymd_and_hms(2025, 12, 20, 10, 30, 0).unwrap();

        let parsed: When = serde_json::from_str(r#"{ "value": "2025-12-20T10:30:00Z" }"#).unwrap();
        assert_eq!(parsed.value, Some(expected));

        let parsed: When = serde_json::from_str(r#"{ "value": "2025-12-20T10:30" }"#).unwrap();
        assert_eq!(parsed.value, Some(expected));

        let millis = expected.timestamp_millis();
        let parsed: When = serde_json::from_str(&format!(r#"{{ "value": {millis} }}"#)).unwrap();
        assert_eq!(parsed.value, Some(expected));
    }

    #[test]
    fn test_datetime_empty_string_is_absent() {
        let parsed: When = serde_json::from_str(r#"{ "value": "" }"#).unwrap();
        assert_eq!(parsed.value, None);
    }

    #[test]
    fn test_datetime_rejects_unknown_format() {
        assert!(serde_json::from_str::<When>(r#"{ "value": "next tuesday" }"#).is_err());
    }
}
