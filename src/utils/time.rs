//! Time and timestamp utilities

use chrono::{DateTime, SecondsFormat, Utc};

/// Current instant in UTC
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Parse an ISO-8601 / RFC 3339 timestamp and normalize it to UTC
///
/// Accepts both the `Z` suffix used by the feed and explicit offsets.
pub fn parse_utc(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value.trim()).map(|dt| dt.with_timezone(&Utc))
}

/// Format an instant the way the feed does (`2024-01-01T00:00:00Z`)
pub fn format_utc(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}
