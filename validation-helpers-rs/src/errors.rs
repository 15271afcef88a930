//! Error handling for the validation library
//!
//! This module provides the single failure signal raised by every predicate
//! in this crate, plus the guards callers use to tell a validation failure
//! apart from a generic runtime fault.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Error raised when a validated value violates a predicate.
///
/// The message is the sole diagnostic payload. The `is_validation_error`
/// marker is always `true` and is serialized together with the message, so
/// a caller that only sees the serialized form (another process, a foreign
/// runtime) can still discriminate a validation failure from a generic
/// fault without relying on type identity.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
    is_validation_error: bool,
}

impl ValidationError {
    /// Create a new validation error with a message
    pub fn new<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        log::debug!("validation failed: {message}");
        Self {
            message,
            is_validation_error: true,
        }
    }

    /// The failure message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Returns true if `error` is a [`ValidationError`].
pub fn is_validation_error(error: &(dyn std::error::Error + 'static)) -> bool {
    error.is::<ValidationError>()
}

/// Returns true if `payload` is the serialized form of a [`ValidationError`].
///
/// Only the marker field is inspected, so the guard keeps working on
/// payloads produced by a foreign runtime that preserved the marker but
/// reshaped the rest.
pub fn is_validation_error_value(payload: &Value) -> bool {
    payload
        .get("is_validation_error")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Build the failure for a predicate: the caller's override text wins,
/// otherwise the predicate's default message is used.
pub(crate) fn fail<T>(error_text: Option<&str>, default: impl Into<String>) -> ValidationResult<T> {
    let message = match error_text {
        Some(text) => text.to_string(),
        None => default.into(),
    };
    Err(ValidationError::new(message))
}
