//! Interop with neighboring value representations.

mod json;
