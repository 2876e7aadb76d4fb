//! The guard abstraction and its constructors.
//!
//! A [`Guard`] is a named, immutable validator over [`Value`]s. Primitive
//! guards check a runtime type tag; combinator guards are built from other
//! guards and fold their sub-results into one. All of them share this one
//! representation, so combinators compose freely over anything guard-shaped.

pub mod combinators;
pub mod host;
pub mod object;
pub mod primitive;

use std::fmt::{self, Display};
use std::sync::Arc;

use crate::path::ROOT_PATH;
use crate::value::Value;
use crate::ValidationResult;

use self::host::HostReflection;
use self::object::ObjectGuard;

/// Validation closure stored inside a guard.
///
/// Guards capture their constituents by `Arc`, so cloning a guard is cheap
/// and sharing one across threads is safe.
pub type GuardFn = Arc<dyn Fn(&Value, &str) -> ValidationResult + Send + Sync>;

/// A named, composable, side-effect-free validator.
///
/// Guards are created once at schema-definition time and are immutable
/// thereafter; a single guard value can serve arbitrarily many concurrent
/// validation calls. Invoking a guard never mutates the input and, on
/// success, passes the value through unchanged.
///
/// The type name doubles as the guard's display form, which is how
/// combinators build composite names (`"number | boolean"`) by joining
/// their constituents.
///
/// # Example
///
/// ```rust
/// use guardrail::{Guard, Value};
///
/// let guard = Guard::union(vec![Guard::number(), Guard::boolean()]);
/// assert_eq!(guard.to_string(), "number | boolean");
/// assert!(guard.validate(&Value::from(69)).is_success());
/// ```
#[derive(Clone)]
pub struct Guard {
    type_name: Arc<str>,
    check: GuardFn,
}

impl Guard {
    /// Creates a guard from a type name and a validation closure.
    ///
    /// This is the factory every primitive and combinator goes through.
    /// Construction never fails.
    pub fn new<F>(type_name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Value, &str) -> ValidationResult + Send + Sync + 'static,
    {
        let type_name: String = type_name.into();
        Self {
            type_name: Arc::from(type_name),
            check: Arc::new(check),
        }
    }

    /// Returns the guard's type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Validates a value at the root sentinel path.
    pub fn validate(&self, value: &Value) -> ValidationResult {
        (self.check)(value, ROOT_PATH)
    }

    /// Validates a value at an explicit diagnostic path.
    ///
    /// Combinators use this to report sub-guard failures at the location of
    /// the value inside the enclosing structure.
    pub fn validate_at(&self, value: &Value, path: &str) -> ValidationResult {
        (self.check)(value, path)
    }
}

impl Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name)
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Factory constructors.
///
/// These mirror the exported surface: the primitive guards plus the
/// combinators, each returning a ready-to-use [`Guard`].
impl Guard {
    /// Guard accepting only the absent/undefined sentinel.
    pub fn nil() -> Guard {
        primitive::nil()
    }

    /// Guard accepting boolean values.
    pub fn boolean() -> Guard {
        primitive::boolean()
    }

    /// Guard accepting numeric values (including NaN).
    pub fn number() -> Guard {
        primitive::number()
    }

    /// Guard accepting text values.
    pub fn string() -> Guard {
        primitive::string()
    }

    /// Guard accepting array values.
    pub fn array() -> Guard {
        primitive::array()
    }

    /// Guard accepting table values.
    pub fn table() -> Guard {
        primitive::table()
    }

    /// Guard accepting any value other than the absent sentinel.
    pub fn defined() -> Guard {
        combinators::defined()
    }

    /// Guard accepting exactly the IEEE not-a-number values.
    pub fn nan() -> Guard {
        combinators::nan()
    }

    /// Guard accepting exactly the given literal value.
    pub fn literal(value: impl Into<Value>) -> Guard {
        combinators::literal(value)
    }

    /// Guard accepting numbers within `min..=max`.
    pub fn range(min: f64, max: f64) -> Guard {
        combinators::range(min, max)
    }

    /// Guard accepting values matched by at least one constituent.
    pub fn union(guards: Vec<Guard>) -> Guard {
        combinators::union(guards)
    }

    /// Guard accepting values matched by every constituent.
    pub fn intersection(guards: Vec<Guard>) -> Guard {
        combinators::intersection(guards)
    }

    /// Builder for a structural record guard.
    ///
    /// # Example
    ///
    /// ```rust
    /// use guardrail::{Guard, Value};
    ///
    /// let user = Guard::object()
    ///     .name("User")
    ///     .field("name", Guard::string())
    ///     .field("age", Guard::number())
    ///     .build();
    ///
    /// let result = user.validate(&Value::table([("name", Value::from("Alice"))]));
    /// assert!(result.is_failure()); // User.age is missing
    /// ```
    pub fn object() -> ObjectGuard {
        ObjectGuard::new()
    }

    /// Guard requiring an exact host-class match.
    pub fn instance_class(host: Arc<dyn HostReflection>, class_name: impl Into<String>) -> Guard {
        host::instance_class(host, class_name)
    }

    /// Guard requiring the host class or one of its descendants.
    pub fn instance_is_a(host: Arc<dyn HostReflection>, class_name: impl Into<String>) -> Guard {
        host::instance_is_a(host, class_name)
    }
}
