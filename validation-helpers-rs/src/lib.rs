//! # Validation Helpers
//!
//! Standalone value-validation predicates shared across services. Each
//! predicate checks one invariant about a dynamically typed value and
//! either passes the value through unchanged or fails fast with a
//! [`ValidationError`] — no pipeline, no accumulated error lists, no
//! state between calls.
//!
//! ## Features
//!
//! - One-purpose checks for nils, numbers, booleans, strings, containers,
//!   and object shapes
//! - Pass-through returns, so checks chain without cloning
//! - A single error kind with a serialization-stable marker for callers
//!   on the far side of a process boundary
//! - Class and instance checks against an explicit
//!   [`classes::TypeClass`] registry
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use validation_helpers_rs::validators;
//!
//! let payload = json!({ "retries": 3 });
//! let retries = &payload["retries"];
//!
//! validators::positive_number(retries, None)?;
//! validators::less_than(retries, &json!(10), None)?;
//! # Ok::<(), validation_helpers_rs::ValidationError>(())
//! ```

mod errors;

pub mod classes;
pub mod validators;

pub use errors::{
    is_validation_error, is_validation_error_value, ValidationError, ValidationResult,
};

/// Re-export commonly used items for convenience
pub mod prelude {
    pub use crate::classes::{TypeClass, Typed};
    pub use crate::errors::{
        is_validation_error, is_validation_error_value, ValidationError, ValidationResult,
    };
    pub use crate::validators;
}

/// Version of the validation library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
