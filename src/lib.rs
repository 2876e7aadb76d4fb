//! # Guardrail
//!
//! Guard combinators that report where and why a value diverges from a
//! declared shape.
//!
//! ## Overview
//!
//! A guard is a named, side-effect-free validator over untyped values.
//! Primitive guards check runtime type tags; combinators (`union`,
//! `intersection`, `object`, `literal`, `range`) build richer guards out of
//! simpler ones. Failures carry a dotted diagnostic path into the structure
//! being validated, and aggregating combinators collect every constituent
//! error rather than stopping at the first, so one validation pass reports
//! everything that is wrong.
//!
//! ## Core Types
//!
//! - [`Value`]: the untyped value domain guards classify
//! - [`Guard`]: a named validator, invokable at a diagnostic path
//! - [`GuardError`]: a single failure with path, expected type, and value
//! - [`GuardErrors`]: a non-empty collection of failures
//! - [`ValidationResult`]: success-with-value or failure-with-errors
//!
//! ## Example
//!
//! ```rust
//! use guardrail::{Guard, Value};
//!
//! let user = Guard::object()
//!     .name("User")
//!     .field("name", Guard::string())
//!     .field("age", Guard::range(0.0, 150.0))
//!     .build();
//!
//! let result = user.validate(&Value::table([
//!     ("name", Value::from("Alice")),
//!     ("age", Value::from(30)),
//! ]));
//! assert!(result.is_success());
//!
//! // Every failing field is reported, each at its own path.
//! let result = user.validate(&Value::table([("age", Value::from(200))]));
//! if let stillwater::Validation::Failure(errors) = result {
//!     assert_eq!(errors.len(), 2);
//!     assert_eq!(errors.first().path, "User.name");
//! }
//! ```

pub mod error;
pub mod guard;
pub mod interop;
pub mod path;
pub mod registry;
pub mod repr;
pub mod value;

pub use error::{GuardError, GuardErrors};
pub use guard::host::HostReflection;
pub use guard::object::ObjectGuard;
pub use guard::Guard;
pub use registry::{builtins, GuardRegistry, RegistryError};
pub use value::{TypeTag, Value};

/// Type alias for validation results using GuardErrors.
///
/// Guards classify without coercing, so the success type defaults to the
/// value domain itself.
pub type ValidationResult<T = Value> = stillwater::Validation<T, GuardErrors>;
