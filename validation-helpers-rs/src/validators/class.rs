//! Class and instance validators
//!
//! Ancestry checks against the [`crate::classes`] registry.

use crate::classes::{TypeClass, Typed};
use crate::errors::{fail, ValidationResult};

/// Validate that a value is an instance of the expected class, directly or
/// through its ancestry
pub fn instance_of<'a, T>(
    value: &'a T,
    expected: &TypeClass,
    error_text: Option<&str>,
) -> ValidationResult<&'a T>
where
    T: Typed + ?Sized,
{
    if value.type_class().inherits(expected) {
        Ok(value)
    } else {
        fail(
            error_text,
            format!("Validated object is not an instance of {}", expected.name()),
        )
    }
}

/// Validate that a class inherits from the expected parent class.
///
/// A class inherits from itself; a nil class fails with the standard
/// message.
pub fn inherits_from<'a>(
    class: Option<&'a TypeClass>,
    parent: &TypeClass,
    error_text: Option<&str>,
) -> ValidationResult<&'a TypeClass> {
    match class {
        Some(class) if class.inherits(parent) => Ok(class),
        _ => fail(
            error_text,
            format!("Validated class does not inherit from {}", parent.name()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::{ANY, NUMBER, OBJECT, STRING};
    use serde_json::{json, Value};
    use std::ptr;

    static X: TypeClass = TypeClass::root("X");
    static X2: TypeClass = TypeClass::extending("X2", &X);
    static Y: TypeClass = TypeClass::root("Y");

    #[derive(Debug)]
    struct Shape;
    #[derive(Debug)]
    struct Circle;

    impl Typed for Shape {
        fn type_class(&self) -> &'static TypeClass {
            &X
        }
    }

    impl Typed for Circle {
        fn type_class(&self) -> &'static TypeClass {
            &X2
        }
    }

    #[test]
    fn test_inherits_from_walks_the_ancestry() {
        assert!(inherits_from(Some(&X), &X, None).is_ok());
        assert!(inherits_from(Some(&X2), &X2, None).is_ok());
        assert!(inherits_from(Some(&X2), &X, None).is_ok());
    }

    #[test]
    fn test_inherits_from_rejects_reversal_and_strangers() {
        let error = inherits_from(Some(&X), &X2, None).unwrap_err();
        assert_eq!(error.message(), "Validated class does not inherit from X2");

        let error = inherits_from(Some(&X), &Y, None).unwrap_err();
        assert_eq!(error.message(), "Validated class does not inherit from Y");
    }

    #[test]
    fn test_inherits_from_fails_fast_on_nil() {
        let error = inherits_from(None, &Y, None).unwrap_err();
        assert_eq!(error.message(), "Validated class does not inherit from Y");
    }

    #[test]
    fn test_inherits_from_passes_the_class_through() {
        let passed = inherits_from(Some(&X2), &X, None).unwrap();
        assert!(ptr::eq(passed, &X2));
    }

    #[test]
    fn test_instance_of_accepts_subclass_instances() {
        assert!(instance_of(&Shape, &X, None).is_ok());
        assert!(instance_of(&Circle, &X2, None).is_ok());
        assert!(instance_of(&Circle, &X, None).is_ok());
    }

    #[test]
    fn test_instance_of_rejects_unrelated_classes() {
        let error = instance_of(&Shape, &X2, None).unwrap_err();
        assert_eq!(error.message(), "Validated object is not an instance of X2");

        let error = instance_of(&Shape, &Y, None).unwrap_err();
        assert_eq!(error.message(), "Validated object is not an instance of Y");
    }

    #[test]
    fn test_instance_of_works_on_plain_values() {
        let text = json!("a");
        assert!(instance_of(&text, &STRING, None).is_ok());
        assert!(instance_of(&text, &ANY, None).is_ok());

        let error = instance_of(&text, &NUMBER, None).unwrap_err();
        assert_eq!(
            error.message(),
            "Validated object is not an instance of Number"
        );

        let error = instance_of(&Value::Null, &OBJECT, None).unwrap_err();
        assert_eq!(
            error.message(),
            "Validated object is not an instance of Object"
        );
    }
}
