//! Date Handling
//!
//! Conversions between the API's ISO-8601 instants and the `yyyy-MM-dd`
//! values used by date inputs. Everything is interpreted in UTC. Unparsable
//! input passes through unchanged so malformed values stay visible instead
//! of silently becoming empty.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Parse a backend instant or a date-input value as UTC.
///
/// Accepts RFC 3339 instants (with or without fractional seconds, any
/// offset), offset-less `yyyy-MM-ddTHH:MM:SS` datetimes (taken as UTC) and
/// plain `yyyy-MM-dd` dates, which are taken as UTC midnight.
pub fn parse_utc(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Convert an API date string to `yyyy-MM-dd` for `<input type="date">`.
pub fn to_input_date(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    match parse_utc(value) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => value.to_string(),
    }
}

/// Convert a date-input value (or any parseable date) to the ISO instant
/// the API expects, e.g. `2025-06-15T00:00:00.000Z`.
pub fn to_iso_utc(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    match parse_utc(value) {
        Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => value.to_string(),
    }
}

/// Milliseconds since the epoch, for sorting and chart geometry.
pub fn timestamp_ms(value: &str) -> Option<i64> {
    parse_utc(value).map(|dt| dt.timestamp_millis())
}

/// Short `M/D/YYYY` form used for chart point labels.
pub fn display_date(value: &str) -> String {
    match parse_utc(value) {
        Some(dt) => dt.format("%-m/%-d/%Y").to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_date_from_instant() {
        assert_eq!(to_input_date("2025-06-15T00:00:00Z"), "2025-06-15");
        assert_eq!(to_input_date("2025-06-15T10:30:00.000+02:00"), "2025-06-15");
        assert_eq!(to_input_date("2025-06-15"), "2025-06-15");
    }

    #[test]
    fn test_offsetless_datetime_is_utc() {
        assert_eq!(to_iso_utc("2025-06-15T10:30:00"), "2025-06-15T10:30:00.000Z");
        assert_eq!(timestamp_ms("2025-06-15T10:30:00"), timestamp_ms("2025-06-15T10:30:00Z"));
    }

    #[test]
    fn test_iso_from_input_date() {
        assert_eq!(to_iso_utc("2025-06-15"), "2025-06-15T00:00:00.000Z");
    }

    #[test]
    fn test_iso_normalizes_offsets_to_utc() {
        assert_eq!(
            to_iso_utc("2025-06-15T10:30:00+02:00"),
            "2025-06-15T08:30:00.000Z"
        );
    }

    #[test]
    fn test_unparsable_passes_through() {
        assert_eq!(to_input_date("not-a-date"), "not-a-date");
        assert_eq!(to_iso_utc("not-a-date"), "not-a-date");
        assert_eq!(display_date("not-a-date"), "not-a-date");
        assert_eq!(timestamp_ms("not-a-date"), None);
    }

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(to_input_date(""), "");
        assert_eq!(to_iso_utc(""), "");
    }

    #[test]
    fn test_timestamp_orders_dates() {
        let early = timestamp_ms("2025-01-01").unwrap();
        let late = timestamp_ms("2025-06-15T08:00:00Z").unwrap();
        assert!(early < late);
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2025-06-15T00:00:00.000Z"), "6/15/2025");
        assert_eq!(display_date("2025-11-03"), "11/3/2025");
    }
}
