//! Primitive type-tag guards.
//!
//! One guard per [`TypeTag`], each comparing a value's runtime tag against
//! the tag it expects. These are the leaves every combinator bottoms out in.

use stillwater::Validation;

use crate::error::{GuardError, GuardErrors};
use crate::value::TypeTag;

use super::Guard;

/// Builds the primitive guard for a type tag.
///
/// The guard is named after the tag and produces at most one error per
/// invocation. `literal` uses this to run the primitive check matching the
/// literal's own runtime type before testing equality.
pub fn for_tag(tag: TypeTag) -> Guard {
    Guard::new(tag.name(), move |value, path| {
        if TypeTag::of(value) == tag {
            Validation::Success(value.clone())
        } else {
            Validation::Failure(GuardErrors::single(GuardError::new(
                path,
                tag.name(),
                value.clone(),
            )))
        }
    })
}

/// Guard accepting only [`Value::Nil`].
pub fn nil() -> Guard {
    for_tag(TypeTag::Nil)
}

/// Guard accepting boolean values.
pub fn boolean() -> Guard {
    for_tag(TypeTag::Boolean)
}

/// Guard accepting numeric values, NaN included.
pub fn number() -> Guard {
    for_tag(TypeTag::Number)
}

/// Guard accepting text values.
pub fn string() -> Guard {
    for_tag(TypeTag::String)
}

/// Guard accepting array values.
pub fn array() -> Guard {
    for_tag(TypeTag::Array)
}

/// Guard accepting table values.
pub fn table() -> Guard {
    for_tag(TypeTag::Table)
}
