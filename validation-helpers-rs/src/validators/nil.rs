//! Nil validators
//!
//! The JSON null is the library's nil; there is no separate undefined.

use crate::errors::{fail, ValidationResult};
use serde_json::Value;

/// Validate that a value is not nil
pub fn not_nil<'a>(value: &'a Value, error_text: Option<&str>) -> ValidationResult<&'a Value> {
    if value.is_null() {
        fail(error_text, "Validated object is null or undefined")
    } else {
        Ok(value)
    }
}

/// Validate that a value is nil
pub fn nil<'a>(value: &'a Value, error_text: Option<&str>) -> ValidationResult<&'a Value> {
    if value.is_null() {
        Ok(value)
    } else {
        fail(error_text, "Validated object is not null or undefined")
    }
}

/// Validate that at least one of the values is not nil
pub fn some_not_nil<'a>(
    values: &'a [Value],
    error_text: Option<&str>,
) -> ValidationResult<&'a [Value]> {
    if values.iter().any(|value| !value.is_null()) {
        Ok(values)
    } else {
        fail(error_text, "All of validated values are nil")
    }
}
