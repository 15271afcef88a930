//! Boolean validators

use crate::errors::{fail, ValidationResult};
use serde_json::Value;

/// Validate that a value is strictly boolean
pub fn boolean<'a>(value: &'a Value, error_text: Option<&str>) -> ValidationResult<&'a Value> {
    if value.is_boolean() {
        Ok(value)
    } else {
        fail(error_text, "Validated object is not Boolean")
    }
}

/// Validate that a value is boolean, or a case-insensitive "true"/"false"
/// string.
///
/// The loose string form is the only coercion in the library; any other
/// string fails.
pub fn boolean_non_strict<'a>(
    value: &'a Value,
    error_text: Option<&str>,
) -> ValidationResult<&'a Value> {
    let loose = match value {
        Value::Bool(_) => true,
        Value::String(text) => {
            text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false")
        }
        _ => false,
    };
    if loose {
        Ok(value)
    } else {
        fail(error_text, "Validated object is not Boolean")
    }
}

/// Validate that a value is the boolean `true`
pub fn boolean_true<'a>(value: &'a Value, error_text: Option<&str>) -> ValidationResult<&'a Value> {
    if value.as_bool() == Some(true) {
        Ok(value)
    } else {
        fail(error_text, "Validated object is not True")
    }
}

/// Validate that a value is the boolean `false`
pub fn boolean_false<'a>(value: &'a Value, error_text: Option<&str>) -> ValidationResult<&'a Value> {
    if value.as_bool() == Some(false) {
        Ok(value)
    } else {
        fail(error_text, "Validated object is not False")
    }
}
