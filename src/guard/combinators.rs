//! Guard combinators.
//!
//! This module provides the guards built on top of the primitives:
//! - `defined`: anything but the absent sentinel
//! - `nan`: specifically not-a-number, not any number
//! - `literal`: exact equality with one value
//! - `range`: numbers within inclusive bounds
//! - `union`: at least one constituent must match
//! - `intersection`: every constituent must match
//!
//! Aggregation differs by combinator: `union` collapses total failure into
//! one error naming the whole alternative set, while `intersection` keeps
//! every error from every failing constituent, in constituent order.

use stillwater::Validation;

use crate::error::{GuardError, GuardErrors};
use crate::repr::{represent, represent_number};
use crate::value::{TypeTag, Value};

use super::{primitive, Guard};

/// Guard accepting any value other than [`Value::Nil`].
pub fn defined() -> Guard {
    Guard::new("defined", |value, path| {
        if value.is_nil() {
            Validation::Failure(GuardErrors::single(GuardError::new(
                path,
                "defined",
                value.clone(),
            )))
        } else {
            Validation::Success(value.clone())
        }
    })
}

/// Guard accepting exactly the IEEE not-a-number values.
///
/// Delegates to the numeric primitive first, then requires `is_nan`, so an
/// ordinary number is rejected rather than classified as numeric.
pub fn nan() -> Guard {
    let number = primitive::number();
    Guard::new("nan", move |value, path| {
        match number.validate_at(value, path) {
            Validation::Success(v) if v.as_number().is_some_and(f64::is_nan) => {
                Validation::Success(v)
            }
            _ => Validation::Failure(GuardErrors::single(GuardError::new(
                path,
                "nan",
                value.clone(),
            ))),
        }
    })
}

/// Guard accepting exactly one literal value.
///
/// The guard is named after the literal's printed form (strings quoted,
/// everything else plain), runs the primitive guard for the literal's own
/// runtime type, and then requires equality.
///
/// # Example
///
/// ```rust
/// use guardrail::{Guard, Value};
///
/// let abc = Guard::literal("abc");
/// assert_eq!(abc.type_name(), "\"abc\"");
/// assert!(abc.validate(&Value::from("abc")).is_success());
/// assert!(abc.validate(&Value::from(69)).is_failure());
/// ```
pub fn literal(value: impl Into<Value>) -> Guard {
    let literal = value.into();
    let type_name = represent(&literal);
    let primitive = primitive::for_tag(TypeTag::of(&literal));

    Guard::new(type_name.clone(), move |value, path| {
        match primitive.validate_at(value, path) {
            Validation::Success(v) if v == literal => Validation::Success(v),
            _ => Validation::Failure(GuardErrors::single(GuardError::new(
                path,
                type_name.as_str(),
                value.clone(),
            ))),
        }
    })
}

/// Guard accepting numbers within `min..=max`, inclusive on both ends.
///
/// Named `number (<min>-<max>)`; both the type check and the bound check
/// fail with that full name as the expected type.
pub fn range(min: f64, max: f64) -> Guard {
    let type_name = format!(
        "number ({}-{})",
        represent_number(min),
        represent_number(max)
    );
    let number = primitive::number();

    Guard::new(type_name.clone(), move |value, path| {
        match number.validate_at(value, path) {
            Validation::Success(v)
                if v.as_number().is_some_and(|n| n >= min && n <= max) =>
            {
                Validation::Success(v)
            }
            _ => Validation::Failure(GuardErrors::single(GuardError::new(
                path,
                type_name.as_str(),
                value.clone(),
            ))),
        }
    })
}

/// Guard accepting values matched by at least one constituent.
///
/// Named by joining the constituent names with `" | "`. Constituents run at
/// the caller's path; if none match, the result is a single synthesized
/// error against the whole alternative set, since no individual constituent
/// explains intent better than the composite name.
pub fn union(guards: Vec<Guard>) -> Guard {
    let type_name = join_names(&guards, " | ");

    Guard::new(type_name.clone(), move |value, path| {
        if guards
            .iter()
            .any(|guard| guard.validate_at(value, path).is_success())
        {
            Validation::Success(value.clone())
        } else {
            Validation::Failure(GuardErrors::single(GuardError::new(
                path,
                type_name.as_str(),
                value.clone(),
            )))
        }
    })
}

/// Guard accepting values matched by every constituent.
///
/// Named by joining the constituent names with `" & "`. On failure the
/// result aggregates every error from every failing constituent, in
/// constituent order, so a caller sees all the ways a value misses a
/// compound shape in one pass.
pub fn intersection(guards: Vec<Guard>) -> Guard {
    let type_name = join_names(&guards, " & ");

    Guard::new(type_name, move |value, path| {
        let mut errors = Vec::new();

        for guard in &guards {
            if let Validation::Failure(guard_errors) = guard.validate_at(value, path) {
                errors.extend(guard_errors);
            }
        }

        if errors.is_empty() {
            Validation::Success(value.clone())
        } else {
            Validation::Failure(GuardErrors::from_vec(errors))
        }
    })
}

fn join_names(guards: &[Guard], separator: &str) -> String {
    guards
        .iter()
        .map(Guard::type_name)
        .collect::<Vec<_>>()
        .join(separator)
}
