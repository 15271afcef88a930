//! Runtime kind validators
//!
//! Tag checks on the value's runtime kind: strings, containers, date-like
//! strings, and callback slots.

use crate::errors::{fail, ValidationResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Validate that a value is textual
pub fn string<'a>(value: &'a Value, error_text: Option<&str>) -> ValidationResult<&'a Value> {
    if value.is_string() {
        Ok(value)
    } else {
        fail(error_text, "Validated object is not a string")
    }
}

/// Validate that a value is an object-like container.
///
/// Arrays qualify (any non-primitive does); nil and the scalar kinds do
/// not.
pub fn object<'a>(value: &'a Value, error_text: Option<&str>) -> ValidationResult<&'a Value> {
    if matches!(value, Value::Object(_) | Value::Array(_)) {
        Ok(value)
    } else {
        fail(error_text, "Validated object is not an object")
    }
}

/// Validate that a value is an array
pub fn array<'a>(value: &'a Value, error_text: Option<&str>) -> ValidationResult<&'a Value> {
    if value.is_array() {
        Ok(value)
    } else {
        fail(error_text, "Validated entity is not an array")
    }
}

/// Validate that a value is a date-like string.
///
/// Accepted forms: an RFC 3339 timestamp, a timezone-less
/// `YYYY-MM-DDTHH:MM:SS` (fractional seconds allowed), or a plain
/// `YYYY-MM-DD`. Anything else, textual or not, fails.
pub fn date<'a>(value: &'a Value, error_text: Option<&str>) -> ValidationResult<&'a Value> {
    if value.as_str().map_or(false, is_date_like) {
        Ok(value)
    } else {
        fail(error_text, "Validated object is not Date")
    }
}

/// Validate that an optional callback slot holds a function.
///
/// Invocability is a compile-time fact in this language; the runtime
/// question only exists for optional slots, so that is the shape checked.
/// On success the function itself is passed through.
pub fn function<'a, F, Arg, Out>(
    value: &'a Option<F>,
    error_text: Option<&str>,
) -> ValidationResult<&'a F>
where
    F: Fn(Arg) -> Out,
{
    match value {
        Some(callback) => Ok(callback),
        None => fail(error_text, "Validated entity is not a function"),
    }
}

fn is_date_like(text: &str) -> bool {
    DateTime::parse_from_rfc3339(text).is_ok()
        || NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
        || NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
}
