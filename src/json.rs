//! Adapters between [`Date`] and `serde_json` values.
//!
//! Dates travel as ISO 8601 strings. Decoding is strict and reports
//! [`INVALID_DATE_STRING`](crate::INVALID_DATE_STRING) for strings that do not name a real day.

use serde::Deserialize;
use serde_json::Value;

use crate::Date;

/// Encodes a date as a JSON string value.
pub fn encode(date: Date) -> Value {
    Value::String(date.to_iso8601())
}

/// Decodes a date from a JSON string value.
///
/// # Errors
/// Fails with an "invalid type" error for non-string values and with
/// "Invalid date string" for strings that are not a valid `YYYY-MM-DD` date.
pub fn decode(value: &Value) -> Result<Date, serde_json::Error> {
    Date::deserialize(value)
}
