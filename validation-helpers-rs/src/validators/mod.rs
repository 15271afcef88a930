//! Validator functions
//!
//! One-purpose predicates over dynamically typed values. Each predicate
//! checks a single invariant and returns the validated value unchanged on
//! success, so calls chain without cloning; on the first violation it
//! fails fast with a [`ValidationError`](crate::ValidationError) carrying
//! either the caller's override text or the predicate's default message.

pub mod boolean;
pub mod class;
pub mod generic;
pub mod nil;
pub mod numeric;
pub mod properties;
pub mod types;

// Re-export all validators for convenience
pub use boolean::*;
pub use class::*;
pub use generic::*;
pub use nil::*;
pub use numeric::*;
pub use properties::*;
pub use types::*;

use serde_json::Value;

// Rendering used by messages that interpolate the offending value:
// scalars print bare (strings unquoted), containers as their JSON text.
pub(crate) fn entity_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::entity_text;
    use serde_json::json;

    #[test]
    fn test_entity_text_renders_scalars_bare() {
        assert_eq!(entity_text(&json!("a")), "a");
        assert_eq!(entity_text(&json!(1)), "1");
        assert_eq!(entity_text(&json!(1.5)), "1.5");
        assert_eq!(entity_text(&json!(null)), "null");
        assert_eq!(entity_text(&json!({})), "{}");
        assert_eq!(entity_text(&json!([1, 2])), "[1,2]");
    }
}
