//! Arbor Formatter
//!
//! Renders an expression tree to its single-line textual form:
//!
//! - integers in decimal
//! - variables by name
//! - binary operations as `(lhs op rhs)`
//! - bindings as `let name = value in body`
//!
//! Rendering is purely syntactic: it never consults an environment, never
//! fails, and renders unsupported operator tokens verbatim. Printing the
//! same tree twice yields identical output.

mod formatter;

pub use formatter::{format_expr, Formatter};
