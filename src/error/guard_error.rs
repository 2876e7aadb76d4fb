//! Guard failure diagnostics.
//!
//! This module provides [`GuardError`] for single validation failures and
//! [`GuardErrors`] for the non-empty collections combinators aggregate.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::{is_root, ROOT_PATH};
use crate::repr::represent;
use crate::value::Value;

/// A single validation failure with full context.
///
/// `GuardError` captures everything a caller needs about one failure:
/// - **path**: dotted location of the failing value, rooted at the guard's
///   entry point
/// - **expected**: the type name of the guard that rejected the value
/// - **actual**: the raw offending value
/// - **message**: the rendered human-readable diagnostic
///
/// # Example
///
/// ```rust
/// use guardrail::{GuardError, Value};
///
/// let error = GuardError::new("Foo.bar", "string", Value::from(69));
/// assert_eq!(error.message, "Expected 'string', got: 69 (Foo.bar)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GuardError {
    /// Dotted path to the value that failed validation.
    pub path: String,
    /// Type name the failing guard expected.
    pub expected: String,
    /// The value that was actually received.
    pub actual: Value,
    /// Human-readable diagnostic, always a complete sentence.
    pub message: String,
}

impl GuardError {
    /// Creates an error with the default message template.
    ///
    /// The message reads `Expected '<expected>', got: <actual>`, with a
    /// ` (<path>)` suffix appended only when the path is neither the root
    /// sentinel nor identical to `expected` (a top-level primitive mismatch
    /// would otherwise render a redundant `(number)` suffix).
    pub fn new(path: impl Into<String>, expected: impl Into<String>, actual: Value) -> Self {
        let path = path.into();
        let expected = expected.into();
        let message = render_message(&path, &expected, &actual);
        Self {
            path,
            expected,
            actual,
            message,
        }
    }

    /// Replaces the rendered message and returns self for chaining.
    ///
    /// Used by guards with bespoke diagnostics, such as the host instance
    /// wrappers.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Returns true when this error occurred at the root sentinel, i.e. a
    /// top-level mismatch with no enclosing structure to name.
    pub fn at_root(&self) -> bool {
        is_root(&self.path)
    }
}

fn render_message(path: &str, expected: &str, actual: &Value) -> String {
    let mut message = format!("Expected '{}', got: {}", expected, represent(actual));
    if path != ROOT_PATH && path != expected {
        message.push_str(&format!(" ({})", path));
    }
    message
}

impl Display for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for GuardError {}

// GuardError stays Send + Sync as long as Value does; these assertions
// catch a regression if either type changes.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<GuardError>();
    assert_sync::<GuardError>();
};

/// A non-empty collection of guard errors.
///
/// `GuardErrors` wraps a `NonEmptyVec<GuardError>` so that a failure can
/// never carry zero diagnostics. It implements `Semigroup`, which is how
/// `intersection` and `object` fold the errors of every failing constituent
/// into one combined failure.
///
/// # Example
///
/// ```rust
/// use guardrail::{GuardError, GuardErrors, Value};
/// use stillwater::prelude::*;
///
/// let missing_a = GuardErrors::single(GuardError::new("Foo.a", "string", Value::Nil));
/// let missing_b = GuardErrors::single(GuardError::new("Bar.b", "number", Value::Nil));
///
/// let combined = missing_a.combine(missing_b);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GuardErrors(NonEmptyVec<GuardError>);

impl GuardErrors {
    /// Creates a collection containing a single error.
    pub fn single(error: GuardError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a collection from a `Vec` of errors.
    ///
    /// # Panics
    ///
    /// Panics if the vec is empty. Aggregating combinators only construct a
    /// failure after collecting at least one error.
    pub fn from_vec(errors: Vec<GuardError>) -> Self {
        Self(NonEmptyVec::from_vec(errors).expect("GuardErrors requires at least one error"))
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns false; the collection is guaranteed non-empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &GuardError> {
        self.0.iter()
    }

    /// Returns the first error in the collection.
    pub fn first(&self) -> &GuardError {
        self.0.head()
    }

    /// Returns all errors at the given path.
    pub fn at_path(&self, path: &str) -> Vec<&GuardError> {
        self.0.iter().filter(|e| e.path == path).collect()
    }

    /// Converts this collection into a `Vec<GuardError>`.
    pub fn into_vec(self) -> Vec<GuardError> {
        self.0.into_vec()
    }
}

impl Semigroup for GuardErrors {
    fn combine(self, other: Self) -> Self {
        GuardErrors(self.0.combine(other.0))
    }
}

impl Display for GuardErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for GuardErrors {}

impl IntoIterator for GuardErrors {
    type Item = GuardError;
    type IntoIter = std::vec::IntoIter<GuardError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message_with_path_suffix() {
        let error = GuardError::new("Foo.foo", "string", Value::Nil);
        assert_eq!(error.message, "Expected 'string', got: nil (Foo.foo)");
    }

    #[test]
    fn test_root_path_omits_suffix() {
        let error = GuardError::new(ROOT_PATH, "number", Value::from("abc"));
        assert_eq!(error.message, "Expected 'number', got: \"abc\"");
        assert!(error.at_root());
    }

    #[test]
    fn test_path_equal_to_expected_omits_suffix() {
        // Top-level object mismatch: path was renamed to the type name.
        let error = GuardError::new("Foo", "Foo", Value::from("abc"));
        assert_eq!(error.message, "Expected 'Foo', got: \"abc\"");
    }

    #[test]
    fn test_with_message_overrides_template() {
        let error = GuardError::new(ROOT_PATH, "Part", Value::from(1))
            .with_message("Expected instance of class 'Part', got: 1");
        assert_eq!(error.message, "Expected instance of class 'Part', got: 1");
        assert_eq!(error.expected, "Part");
    }

    #[test]
    fn test_errors_combine_preserves_order() {
        let first = GuardErrors::single(GuardError::new("Foo.a", "string", Value::Nil));
        let second = GuardErrors::single(GuardError::new("Bar.b", "number", Value::Nil));

        let combined = first.combine(second);
        assert_eq!(combined.len(), 2);
        assert_eq!(combined.first().path, "Foo.a");
    }

    #[test]
    fn test_errors_at_path() {
        let errors = GuardErrors::from_vec(vec![
            GuardError::new("Foo.a", "string", Value::Nil),
            GuardError::new("Foo.a", "defined", Value::Nil),
            GuardError::new("Foo.b", "number", Value::Nil),
        ]);

        assert_eq!(errors.at_path("Foo.a").len(), 2);
        assert_eq!(errors.at_path("Foo.b").len(), 1);
        assert_eq!(errors.at_path("Foo.c").len(), 0);
    }

    #[test]
    fn test_errors_display_numbers_each_error() {
        let errors = GuardErrors::from_vec(vec![
            GuardError::new("Foo.a", "string", Value::Nil),
            GuardError::new("Bar.b", "number", Value::Nil),
        ]);

        let display = errors.to_string();
        assert!(display.contains("2 error(s)"));
        assert!(display.contains("1. Expected 'string'"));
        assert!(display.contains("2. Expected 'number'"));
    }

    #[test]
    fn test_semigroup_associativity() {
        let e1 = GuardErrors::single(GuardError::new("a", "string", Value::Nil));
        let e2 = GuardErrors::single(GuardError::new("b", "number", Value::Nil));
        let e3 = GuardErrors::single(GuardError::new("c", "boolean", Value::Nil));

        let left = e1.clone().combine(e2.clone()).combine(e3.clone());
        let right = e1.combine(e2.combine(e3));

        let left_paths: Vec<_> = left.iter().map(|e| &e.path).collect();
        let right_paths: Vec<_> = right.iter().map(|e| &e.path).collect();
        assert_eq!(left_paths, right_paths);
    }
}
