//! Timestamp parsing and display formatting for post frontmatter.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, ParseError, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Parses a frontmatter timestamp. Accepts RFC 3339
/// (`2021-03-28T09:30:00Z`), a naive date-time (`2021-03-28T09:30:00`, read
/// as UTC), or a bare date (`2021-03-28`, read as UTC midnight) so posts
/// that only care about the day don't have to spell out a full instant.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, ParseError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }
    // Try the date-only form last so a failure reports the simplest
    // accepted format.
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

/// Formats an instant for display, e.g. `March 28, 2021`.
pub fn format_date(instant: DateTime<Utc>) -> String {
    instant.format("%B %d, %Y").to_string()
}

/// Deserializes a required frontmatter timestamp via [`parse_timestamp`].
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_timestamp(&s).map_err(|e| D::Error::custom(format!("{}", e)))
}

/// Deserializes an optional frontmatter timestamp via [`parse_timestamp`].
pub fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) => parse_timestamp(&s)
            .map(Some)
            .map_err(|e| D::Error::custom(format!("{}", e))),
    }
}
