//! object-position lexer
//!
//! Splits a CSS `object-position` value into tokens and classifies each one
//! as a percentage, a reserved keyword, an empty piece, or something else.
//!
//! # Example
//!
//! ```
//! use objpos_lexer::{PositionKeyword, Scanner, TokenKind};
//!
//! let tokens = Scanner::tokenize("left 25%");
//! assert_eq!(tokens[0].kind, TokenKind::Keyword(PositionKeyword::Left));
//! assert_eq!(tokens[1].kind, TokenKind::Percentage(0.25));
//! ```

pub mod number;
pub mod scanner;
pub mod token;

pub use scanner::Scanner;
pub use token::{PositionKeyword, Span, Token, TokenKind};
