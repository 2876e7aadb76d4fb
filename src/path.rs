//! Diagnostic path encoding.
//!
//! This module builds the dotted paths that locate a failure inside a nested
//! structure (e.g. `User.address.street`). Paths begin at the root sentinel
//! [`ROOT_PATH`], which is never emitted in output.

use std::sync::OnceLock;

use regex::Regex;

/// The distinguished "no nesting yet" path marker.
///
/// Guards invoked without an explicit path start here. The sentinel is
/// resolved away before display: [`path_join`] drops it, and the `object`
/// guard replaces it with the structure's own type name.
pub const ROOT_PATH: &str = "$";

/// Matches the characters `union`/`intersection` use to join type names.
fn combinator_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r"[&|]").expect("marker pattern is valid"))
}

/// Joins path segments with `.`, dropping root-sentinel segments.
///
/// A segment containing a combinator marker (`&` or `|`) is wrapped in
/// parentheses so the joined path stays unambiguous: a field guarded by a
/// union type renders as `Parent.(A | B)` rather than `Parent.A | B`.
///
/// # Example
///
/// ```rust
/// use guardrail::path::{path_join, ROOT_PATH};
///
/// assert_eq!(path_join([ROOT_PATH, "Foo", "bar"]), "Foo.bar");
/// assert_eq!(path_join(["Parent", "A | B"]), "Parent.(A | B)");
/// ```
pub fn path_join<'a, I>(segments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let marker = combinator_marker();
    segments
        .into_iter()
        .filter(|segment| *segment != ROOT_PATH)
        .map(|segment| {
            if marker.is_match(segment) {
                format!("({})", segment)
            } else {
                segment.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Returns true when a path is still the root sentinel.
pub fn is_root(path: &str) -> bool {
    path == ROOT_PATH
}
