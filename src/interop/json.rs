//! Conversions between [`Value`] and `serde_json::Value`.
//!
//! Callers frequently hold parsed JSON; these impls bridge it into the
//! guard value domain and back. JSON has no absent sentinel, so `null`
//! maps to [`Value::Nil`] in both directions. NaN and infinities are not
//! representable in JSON and map to `null` on the way out.

use indexmap::IndexMap;

use crate::value::Value;

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => {
                // as_f64 covers every arm of serde_json's Number; integers
                // beyond 2^53 round, which f64 cannot avoid.
                Value::Number(n.as_f64().unwrap_or(f64::NAN))
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(elements) => {
                Value::Array(elements.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Table(
                fields
                    .into_iter()
                    .map(|(name, field)| (name, Value::from(field)))
                    .collect::<IndexMap<_, _>>(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Nil => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(b),
            Value::Number(n) => serde_json::Number::from_f64(n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(elements) => {
                serde_json::Value::Array(elements.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Table(fields) => serde_json::Value::Object(
                fields
                    .into_iter()
                    .map(|(name, field)| (name, serde_json::Value::from(field)))
                    .collect(),
            ),
        }
    }
}
