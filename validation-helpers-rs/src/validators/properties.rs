//! Property-shape validators
//!
//! Checks over the keys of an object. Both predicates delegate to
//! [`not_nil`] first and sweep the whole name list before failing, so the
//! message enumerates every offending property in input order.

use super::nil::not_nil;
use crate::errors::{fail, ValidationResult};
use serde_json::Value;

/// Validate that an object defines every one of the given properties
pub fn with_properties<'a>(
    value: &'a Value,
    properties: &[&str],
    error_text: Option<&str>,
) -> ValidationResult<&'a Value> {
    not_nil(value, None)?;

    let missing: Vec<&str> = properties
        .iter()
        .copied()
        .filter(|property| lookup(value, property).is_none())
        .collect();

    if missing.is_empty() {
        Ok(value)
    } else {
        fail(
            error_text,
            format!(
                "Validated object doesn't have properties: {}",
                missing.join(",")
            ),
        )
    }
}

/// Validate that none of the given properties of an object is nil.
///
/// A property that is missing entirely counts as nil.
pub fn not_nil_properties<'a>(
    value: &'a Value,
    properties: &[&str],
    error_text: Option<&str>,
) -> ValidationResult<&'a Value> {
    not_nil(value, None)?;

    let nil_names: Vec<&str> = properties
        .iter()
        .copied()
        .filter(|property| lookup(value, property).map_or(true, Value::is_null))
        .collect();

    if nil_names.is_empty() {
        Ok(value)
    } else {
        fail(
            error_text,
            format!("Validated object has nil properties: {}", nil_names.join(",")),
        )
    }
}

// Key lookup on the underlying map; non-object carriers define no keys.
fn lookup<'a>(value: &'a Value, property: &str) -> Option<&'a Value> {
    value.as_object().and_then(|entries| entries.get(property))
}
