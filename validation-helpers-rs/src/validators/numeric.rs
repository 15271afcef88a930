//! Numeric validators
//!
//! Range-style predicates delegate to [`number`] first, so non-numeric
//! input surfaces the not-a-number message rather than a range message.

use super::entity_text;
use crate::errors::{fail, ValidationResult};
use serde_json::Value;

/// Validate that a value is a finite number.
///
/// `serde_json` numbers are always finite: NaN and the infinities have no
/// JSON representation and degrade to `Null`, which fails here. Numeric
/// strings fail here too.
pub fn number<'a>(value: &'a Value, error_text: Option<&str>) -> ValidationResult<&'a Value> {
    if value.is_number() {
        Ok(value)
    } else {
        fail(error_text, "Validated object is not a number")
    }
}

/// Validate that a value is a number greater than zero
pub fn positive_number<'a>(
    value: &'a Value,
    error_text: Option<&str>,
) -> ValidationResult<&'a Value> {
    number(value, None)?;
    if numeric(value) > 0.0 {
        Ok(value)
    } else {
        fail(error_text, "Validated number is not positive")
    }
}

/// Validate that a value is a number less than zero
pub fn negative_number<'a>(
    value: &'a Value,
    error_text: Option<&str>,
) -> ValidationResult<&'a Value> {
    number(value, None)?;
    if numeric(value) < 0.0 {
        Ok(value)
    } else {
        fail(error_text, "Validated number is not negative")
    }
}

/// Validate that a number is strictly less than a threshold
pub fn less_than<'a>(
    value: &'a Value,
    threshold: &Value,
    error_text: Option<&str>,
) -> ValidationResult<&'a Value> {
    number(value, None)?;
    number(threshold, Some("Threshold is not a number"))?;
    if numeric(value) < numeric(threshold) {
        Ok(value)
    } else {
        fail(
            error_text,
            format!(
                "Validated number {} is not less than the threshold {}",
                entity_text(value),
                entity_text(threshold)
            ),
        )
    }
}

/// Validate that a number is strictly greater than a threshold
pub fn greater_than<'a>(
    value: &'a Value,
    threshold: &Value,
    error_text: Option<&str>,
) -> ValidationResult<&'a Value> {
    number(value, None)?;
    number(threshold, Some("Threshold is not a number"))?;
    if numeric(value) > numeric(threshold) {
        Ok(value)
    } else {
        fail(
            error_text,
            format!(
                "Validated number {} is not greater than the threshold {}",
                entity_text(value),
                entity_text(threshold)
            ),
        )
    }
}

// The lossy f64 view exists for every numeric variant, so this only runs
// after `number` has passed.
fn numeric(value: &Value) -> f64 {
    value.as_f64().unwrap_or_default()
}
