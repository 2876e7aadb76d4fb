//! Dynamic value representation.
//!
//! This module provides the [`Value`] enum that guards classify, along with
//! [`TypeTag`] for runtime type inspection. Values are plain data: guards
//! never mutate them, and successful validation passes them through unchanged.

use std::fmt::{self, Display};

use indexmap::IndexMap;

/// An untyped runtime value.
///
/// `Value` is the input domain of every guard. It covers the absent/undefined
/// sentinel ([`Value::Nil`]), the scalar types, and the two container shapes.
/// Numbers are IEEE `f64`, so NaN is representable and the [`nan`] guard's
/// self-inequality check is meaningful.
///
/// [`nan`]: crate::guard::combinators::nan
///
/// # Example
///
/// ```rust
/// use guardrail::{TypeTag, Value};
///
/// let value = Value::table([("name", Value::from("Alice"))]);
/// assert_eq!(TypeTag::of(&value), TypeTag::Table);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent/undefined sentinel.
    Nil,
    /// Boolean scalar.
    Boolean(bool),
    /// IEEE double-precision number.
    Number(f64),
    /// UTF-8 text.
    String(String),
    /// Positional sequence.
    Array(Vec<Value>),
    /// Record with string-named fields, insertion order preserved.
    Table(IndexMap<String, Value>),
}

impl Value {
    /// Builds a table value from field pairs, preserving their order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use guardrail::Value;
    ///
    /// let user = Value::table([
    ///     ("name", Value::from("Alice")),
    ///     ("age", Value::from(30)),
    /// ]);
    /// assert_eq!(user.field("age"), &Value::Number(30.0));
    /// ```
    pub fn table<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Table(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }

    /// Builds an array value.
    pub fn array<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Array(elements.into_iter().collect())
    }

    /// Looks up a named field, treating absence as [`Value::Nil`].
    ///
    /// Non-table values have no fields, so every lookup on them yields `Nil`.
    /// This is the lookup the `object` guard uses: a missing required field
    /// is validated as `Nil` against its declared guard.
    pub fn field(&self, name: &str) -> &Value {
        match self {
            Value::Table(fields) => fields.get(name).unwrap_or(&Value::Nil),
            _ => &Value::Nil,
        }
    }

    /// Returns true for the absent/undefined sentinel.
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Returns the number if this value is numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string slice if this value is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the field map if this value is a table.
    pub fn as_table(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Table(fields) => Some(fields),
            _ => None,
        }
    }
}

/// Runtime type tag of a [`Value`].
///
/// Primitive guards compare a value's tag against the tag they expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// The absent/undefined sentinel.
    Nil,
    /// Boolean scalar.
    Boolean,
    /// IEEE double-precision number.
    Number,
    /// UTF-8 text.
    String,
    /// Positional sequence.
    Array,
    /// Record with string-named fields.
    Table,
}

impl TypeTag {
    /// Returns the tag of a value.
    pub fn of(value: &Value) -> TypeTag {
        match value {
            Value::Nil => TypeTag::Nil,
            Value::Boolean(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::String(_) => TypeTag::String,
            Value::Array(_) => TypeTag::Array,
            Value::Table(_) => TypeTag::Table,
        }
    }

    /// Returns the tag's lowercase name, used as the primitive guard name.
    pub fn name(&self) -> &'static str {
        match self {
            TypeTag::Nil => "nil",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Array => "array",
            TypeTag::Table => "table",
        }
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(value: IndexMap<String, Value>) -> Self {
        Value::Table(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Value::Nil,
        }
    }
}
