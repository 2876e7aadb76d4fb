//! The built-in guard registry.
//!
//! This module provides [`GuardRegistry`], an immutable name-to-guard map,
//! and [`builtins`], the process-wide frozen instance holding the primitive
//! guards plus `defined` and `nan`. The registry is assembled once and never
//! mutated afterwards, so concurrent readers need no synchronization.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::guard::{combinators, primitive, Guard};
use crate::value::Value;
use crate::ValidationResult;

/// An immutable mapping from guard names to guard values.
///
/// Registries are fully populated at construction. Parameterized guards
/// (`literal`, `range`, `union`, `intersection`, `object`, the host
/// instance wrappers) are built through their factory functions at
/// schema-definition time and do not live here.
///
/// # Example
///
/// ```rust
/// use guardrail::{registry::builtins, Value};
///
/// let result = builtins().validate("number", &Value::from(69)).unwrap();
/// assert!(result.is_success());
///
/// assert!(builtins().validate("no-such-guard", &Value::Nil).is_err());
/// ```
pub struct GuardRegistry {
    guards: HashMap<String, Guard>,
}

impl GuardRegistry {
    /// Creates a registry holding the built-in guard set.
    pub fn with_builtins() -> Self {
        let mut guards = HashMap::new();
        for guard in [
            primitive::nil(),
            primitive::boolean(),
            primitive::number(),
            primitive::string(),
            primitive::array(),
            primitive::table(),
            combinators::defined(),
            combinators::nan(),
        ] {
            guards.insert(guard.type_name().to_string(), guard);
        }
        Self { guards }
    }

    /// Creates a registry holding the builtins plus additional named guards.
    ///
    /// Entries are supplied up front; the registry is immutable once built.
    /// A supplied guard shadows a builtin of the same name.
    pub fn with_guards<K, I>(extra: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Guard)>,
    {
        let mut registry = Self::with_builtins();
        for (name, guard) in extra {
            registry.guards.insert(name.into(), guard);
        }
        registry
    }

    /// Retrieves a guard by name.
    pub fn get(&self, name: &str) -> Option<&Guard> {
        self.guards.get(name)
    }

    /// Returns true when a guard with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.guards.contains_key(name)
    }

    /// Returns the registered guard names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.guards.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Validates a value against a named guard.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::GuardNotFound`] when no guard with that
    /// name is registered. A registered guard's rejection is a validation
    /// outcome, not an error at this level.
    pub fn validate(&self, name: &str, value: &Value) -> Result<ValidationResult, RegistryError> {
        let guard = self
            .get(name)
            .ok_or_else(|| RegistryError::GuardNotFound(name.to_string()))?;
        Ok(guard.validate(value))
    }
}

impl Default for GuardRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// Returns the process-wide frozen registry of built-in guards.
///
/// Initialized on first use and shared read-only for the rest of the
/// process lifetime.
pub fn builtins() -> &'static GuardRegistry {
    static BUILTINS: OnceLock<GuardRegistry> = OnceLock::new();
    BUILTINS.get_or_init(GuardRegistry::with_builtins)
}

/// Errors from registry lookups.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to validate against a guard name that is not registered.
    #[error("guard '{0}' not registered")]
    GuardNotFound(String),
}
