//! object-position parser
//!
//! Parses a CSS `object-position` value such as `"50% 50%"`, `"left top"` or
//! `"center"` into fractional `(x, y)` offsets. One token sets both axes;
//! unknown tokens fall back to the center; malformed percentages yield NaN.
//!
//! ```
//! use objpos_parser::{parse_object_position, ObjectPosition};
//!
//! assert_eq!(parse_object_position(""), ObjectPosition::CENTER);
//! assert_eq!(parse_object_position("25% 75%").to_string(), "25% 75%");
//! ```

pub mod parser;
pub mod position;

pub use parser::{parse_object_position, parse_optional, parse_single, Parser};
pub use position::{format_percentage, ObjectPosition};

/// Strict-mode error with the column of the offending token.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Parse error at column {column}: {message}")]
pub struct ParseError {
    pub message: String,
    pub column: usize,
}
