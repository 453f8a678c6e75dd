//! Wire date-string parsing for ordering and due-date classification.
//!
//! # Responsibility
//! - Parse the ISO date strings carried by server records into comparable
//!   timestamps.
//! - Keep lenient acceptance: full RFC 3339, naive datetime, and date-only
//!   forms all occur in practice.
//!
//! # Invariants
//! - Parsing never panics; unparseable input yields `None` and the caller
//!   decides the bucket.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parses a server date string into a naive UTC timestamp.
///
/// Accepted forms, tried in order:
/// - RFC 3339 datetime (offset is normalized to UTC),
/// - naive datetime `YYYY-MM-DDTHH:MM:SS` with optional fraction,
/// - date-only `YYYY-MM-DD` (midnight).
pub fn parse_wire_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.naive_utc());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed);
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(parsed);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_hms_opt(0, 0, 0).unwrap_or_default())
}

/// Parses the calendar date of a server date string.
pub fn parse_wire_date(value: &str) -> Option<NaiveDate> {
    parse_wire_timestamp(value).map(|ts| ts.date())
}
