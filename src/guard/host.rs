//! Host instance-hierarchy guards.
//!
//! Some values represent objects managed by a host runtime with its own
//! class system. The core stays portable by depending only on the
//! [`HostReflection`] capability; the host side supplies the actual
//! classification logic.

use std::sync::Arc;

use stillwater::Validation;

use crate::error::{GuardError, GuardErrors};
use crate::repr::represent;
use crate::value::Value;

use super::Guard;

/// Capability interface to the host runtime's object classification.
///
/// `class_of` identifies the exact class of a value, or `None` when the
/// value is not a host instance at all. `is_a` answers the ancestor
/// relation, including the class itself.
pub trait HostReflection: Send + Sync {
    /// Returns the exact class name of a host instance value.
    fn class_of(&self, value: &Value) -> Option<String>;

    /// Returns true when the value is an instance of `class_name` or one
    /// of its descendants.
    fn is_a(&self, value: &Value, class_name: &str) -> bool;
}

/// Guard requiring an exact host-class match.
pub fn instance_class(host: Arc<dyn HostReflection>, class_name: impl Into<String>) -> Guard {
    let class_name = class_name.into();

    Guard::new(class_name.clone(), move |value, path| {
        if host.class_of(value).as_deref() == Some(class_name.as_str()) {
            Validation::Success(value.clone())
        } else {
            Validation::Failure(GuardErrors::single(
                GuardError::new(path, class_name.as_str(), value.clone()).with_message(format!(
                    "Expected instance of class '{}', got: {}",
                    class_name,
                    represent(value)
                )),
            ))
        }
    })
}

/// Guard requiring the host class or one of its descendants.
pub fn instance_is_a(host: Arc<dyn HostReflection>, class_name: impl Into<String>) -> Guard {
    let class_name = class_name.into();

    Guard::new(class_name.clone(), move |value, path| {
        // A value with no class at all is not an instance, regardless of
        // what the hierarchy says.
        if host.class_of(value).is_some() && host.is_a(value, &class_name) {
            Validation::Success(value.clone())
        } else {
            Validation::Failure(GuardErrors::single(
                GuardError::new(path, class_name.as_str(), value.clone()).with_message(format!(
                    "Expected instance extending '{}', got: {}",
                    class_name,
                    represent(value)
                )),
            ))
        }
    })
}
