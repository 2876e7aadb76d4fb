//! Structural record guards.
//!
//! This module provides [`ObjectGuard`], a builder for guards over named
//! record shapes. Field errors are accumulated across every declared field
//! rather than short-circuiting on the first failure.

use indexmap::IndexMap;
use stillwater::Validation;

use crate::error::{GuardError, GuardErrors};
use crate::path::{is_root, path_join};
use crate::value::{TypeTag, Value};

use super::Guard;

/// Default type name for object guards built without an explicit one.
const ANONYMOUS: &str = "AnonymousObject";

/// Builder for a guard over a named structural record.
///
/// Every declared field is validated against its guard at a path formed by
/// joining the structure's path with the field name. Absent fields validate
/// as [`Value::Nil`], so a required field reports a standard
/// "expected `<type>`, got nil" diagnostic at its nested path.
///
/// When the built guard is invoked with no enclosing path, its own type
/// name becomes the root of field paths, so top-level failures still read
/// `Foo.bar` rather than a bare field name.
///
/// # Example
///
/// ```rust
/// use guardrail::{Guard, Value};
///
/// let guard = Guard::object()
///     .name("Foo")
///     .field("foo", Guard::string())
///     .build();
///
/// let result = guard.validate(&Value::table([("foo", Value::from(69))]));
/// if let stillwater::Validation::Failure(errors) = result {
///     assert_eq!(errors.first().path, "Foo.foo");
/// } else {
///     panic!("expected failure");
/// }
/// ```
#[derive(Default)]
pub struct ObjectGuard {
    type_name: Option<String>,
    fields: IndexMap<String, Guard>,
}

impl ObjectGuard {
    /// Creates an empty builder with the anonymous type name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the structure's type name, used for diagnostics and as the
    /// root of field paths.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.type_name = Some(name.into());
        self
    }

    /// Declares a field and the guard its value must satisfy.
    ///
    /// Declaration order is preserved, which fixes the order accumulated
    /// field errors are reported in.
    pub fn field(mut self, name: impl Into<String>, guard: Guard) -> Self {
        self.fields.insert(name.into(), guard);
        self
    }

    /// Builds the guard.
    pub fn build(self) -> Guard {
        let type_name = self.type_name.unwrap_or_else(|| ANONYMOUS.to_string());
        let fields = self.fields;
        let guard_name = type_name.clone();

        Guard::new(guard_name, move |value, caller_path| {
            // A top-level invocation reports field errors relative to the
            // structure's own name.
            let path = if is_root(caller_path) {
                type_name.clone()
            } else {
                caller_path.to_string()
            };

            if TypeTag::of(value) != TypeTag::Table {
                return Validation::Failure(GuardErrors::single(GuardError::new(
                    path,
                    type_name.as_str(),
                    value.clone(),
                )));
            }

            let mut errors = Vec::new();

            for (field_name, field_guard) in &fields {
                let field_path = path_join([path.as_str(), field_name.as_str()]);
                let field_value = value.field(field_name);

                if let Validation::Failure(field_errors) =
                    field_guard.validate_at(field_value, &field_path)
                {
                    errors.extend(field_errors);
                }
            }

            if errors.is_empty() {
                Validation::Success(value.clone())
            } else {
                Validation::Failure(GuardErrors::from_vec(errors))
            }
        })
    }
}
