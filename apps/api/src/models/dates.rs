//! Lenient calendar-date parsing for records coming out of the document store.
//!
//! Stored documents carry either plain ISO dates (`2023-06-01`) or full
//! timestamps (`2023-06-01T00:00:00.000Z`). Both collapse to a `NaiveDate`.

use chrono::{DateTime, NaiveDate};
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

const ISO_DATE: &str = "%Y-%m-%d";

/// Parses an ISO-8601 date or timestamp, keeping only the calendar date.
pub fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, ISO_DATE) {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    // Naive timestamps without an offset, e.g. `2023-06-01T12:30:00`
    raw.get(..10)
        .filter(|_| raw.as_bytes().get(10) == Some(&b'T'))
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, ISO_DATE).ok())
}

/// Reads a loosely-typed date field.
///
/// `Ok(None)` for a missing, `null` or blank value; `Err` carries the raw
/// JSON text of anything that is not a date in either accepted form.
pub fn read_date_value(value: Option<&Value>) -> Result<Option<NaiveDate>, String> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(v) => v
            .as_str()
            .and_then(parse_flexible_date)
            .map(Some)
            .ok_or_else(|| v.to_string()),
    }
}

pub fn flexible<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flexible_date(&raw).ok_or_else(|| de::Error::custom(format!("invalid date '{raw}'")))
}

/// Optional variant: `null`, a missing field and `""` all mean "no date".
pub fn flexible_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_flexible_date(s)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid date '{s}'"))),
    }
}
