//! Text encoding of appointment timestamps.
//!
//! Timestamps are persisted as ISO-8601 text (`YYYY-MM-DDTHH:MM:SS`) rather than a
//! native date/time column. ISO-8601 sorts lexically in chronological order, which is
//! what lets the day queries compare the column with plain string bounds.

use chrono::{NaiveDate, NaiveDateTime, ParseError};

/// Storage format, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Accepted on read: fractional seconds written by older files are tolerated.
const TIMESTAMP_PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, ParseError> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_PARSE_FORMAT)
}

/// Inclusive text bounds `[DATE T00:00:00, DATE T23:59:59]` of a civil day.
pub fn day_bounds(date: NaiveDate) -> (String, String) {
    let day = date.format("%Y-%m-%d");
    (format!("{}T00:00:00", day), format!("{}T23:59:59", day))
}
