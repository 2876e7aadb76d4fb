//! Diagnostic rendering of values.
//!
//! Error messages embed the offending value in textual form. [`represent`]
//! is the default renderer; callers wanting different output construct
//! errors with an explicit message instead.

use std::fmt::Write;

use crate::value::Value;

/// Containers nested deeper than this render as `...`.
const MAX_DEPTH: usize = 4;

/// Renders a value for embedding in a diagnostic message.
///
/// Scalars render in literal form: `nil`, `true`, `69` (whole numbers
/// without a fractional suffix), `nan`, `"text"` (quoted and escaped).
/// Containers render as one-line literals, cut off past a fixed depth.
///
/// # Example
///
/// ```rust
/// use guardrail::{repr::represent, Value};
///
/// assert_eq!(represent(&Value::Nil), "nil");
/// assert_eq!(represent(&Value::from(255)), "255");
/// assert_eq!(represent(&Value::from("abc")), "\"abc\"");
/// ```
pub fn represent(value: &Value) -> String {
    let mut out = String::new();
    render(value, 0, &mut out);
    out
}

/// Renders a number the way the diagnostics expect: whole finite values
/// without a trailing `.0`, NaN as `nan`.
pub fn represent_number(n: f64) -> String {
    if n.is_nan() {
        "nan".to_string()
    } else if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

fn render(value: &Value, depth: usize, out: &mut String) {
    match value {
        Value::Nil => out.push_str("nil"),
        Value::Boolean(b) => {
            let _ = write!(out, "{}", b);
        }
        Value::Number(n) => out.push_str(&represent_number(*n)),
        Value::String(s) => {
            let _ = write!(out, "{:?}", s);
        }
        Value::Array(elements) => {
            if depth >= MAX_DEPTH {
                out.push_str("[...]");
                return;
            }
            out.push('[');
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                render(element, depth + 1, out);
            }
            out.push(']');
        }
        Value::Table(fields) => {
            if depth >= MAX_DEPTH {
                out.push_str("{...}");
                return;
            }
            out.push('{');
            for (i, (name, field)) in fields.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "{}: ", name);
                render(field, depth + 1, out);
            }
            out.push('}');
        }
    }
}
