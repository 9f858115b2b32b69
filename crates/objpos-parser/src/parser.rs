//! Position parser.
//!
//! Turns the tokens from `objpos-lexer` into an `ObjectPosition`. The lenient
//! entry points never fail: unknown tokens fall back to the center, and
//! malformed percentages propagate NaN. `Parser::check` layers strict
//! validation on top without changing the values it returns.

use crate::position::ObjectPosition;
use crate::ParseError;
use objpos_lexer::number::scan_leading_float;
use objpos_lexer::{Scanner, Token, TokenKind};
use tracing::{debug, trace};

/// Fallback used for either axis when a token is not understood.
pub const FALLBACK: f64 = 0.5;

/// Parse an `object-position` value.
///
/// ```
/// use objpos_parser::parse_object_position;
///
/// assert_eq!(parse_object_position("left bottom").to_tuple(), (0.0, 1.0));
/// assert_eq!(parse_object_position("30%").to_tuple(), (0.3, 0.3));
/// ```
pub fn parse_object_position(input: &str) -> ObjectPosition {
    Parser::parse(input)
}

/// Parse a value that may be absent. `None` yields the center.
pub fn parse_optional(input: Option<&str>) -> ObjectPosition {
    input.map_or(ObjectPosition::CENTER, parse_object_position)
}

/// Resolve a single token to a fraction, using `fallback` for anything that is
/// neither a percentage nor a keyword.
pub fn parse_single(token: &str, fallback: f64) -> f64 {
    resolve(&Scanner::classify(token), fallback)
}

fn resolve(kind: &TokenKind, fallback: f64) -> f64 {
    match kind {
        TokenKind::Percentage(value) => {
            if value.is_nan() {
                debug!("unreadable percentage, propagating NaN");
            }
            *value
        }
        TokenKind::Keyword(keyword) => keyword.fraction(),
        TokenKind::Empty => fallback,
        TokenKind::Other(text) => {
            debug!(token = %text, fallback, "unrecognized position token");
            fallback
        }
    }
}

/// Position value parser.
pub struct Parser {
    tokens: Vec<Token>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Parse a value leniently.
    pub fn parse(source: &str) -> ObjectPosition {
        if source.is_empty() {
            return ObjectPosition::CENTER;
        }
        Parser::new(Scanner::tokenize(source)).resolve_pair()
    }

    /// Parse a value, rejecting anything a stylesheet would not accept: more
    /// than two values, empty values, percentages that are not plain finite
    /// numbers, unknown words, and keywords on the wrong side (`top` first,
    /// `left` second).
    ///
    /// On success the result is identical to [`Parser::parse`].
    pub fn check(source: &str) -> Result<ObjectPosition, ParseError> {
        if source.is_empty() {
            return Ok(ObjectPosition::CENTER);
        }

        let parser = Parser::new(Scanner::tokenize(source));
        parser.validate(source)?;
        Ok(parser.resolve_pair())
    }

    /// The first token sets X. The second sets Y, or the first is reused when
    /// the second is missing or empty. Later tokens are ignored.
    fn resolve_pair(&self) -> ObjectPosition {
        let Some(first) = self.tokens.first() else {
            return ObjectPosition::CENTER;
        };
        let second = self
            .tokens
            .get(1)
            .filter(|token| !token.is_empty())
            .unwrap_or(first);

        let x = resolve(&first.kind, FALLBACK);
        let y = resolve(&second.kind, FALLBACK);
        trace!(x, y, "resolved object position");
        ObjectPosition::new(x, y)
    }

    fn validate(&self, source: &str) -> Result<(), ParseError> {
        if self.tokens.len() > 2 {
            return Err(self.error(
                &self.tokens[2],
                format!("Expected at most two values, found {}", self.tokens.len()),
            ));
        }

        for token in &self.tokens {
            let text = &source[token.span.start..token.span.end];
            match &token.kind {
                TokenKind::Empty => {
                    return Err(self.error(token, "Empty value (repeated or edge space)"));
                }
                TokenKind::Percentage(_) => {
                    let number = &text[..text.len() - 1];
                    let plain = number
                        .starts_with(|c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '.'));
                    match scan_leading_float(number) {
                        Some((value, end))
                            if plain && end == number.len() && value.is_finite() => {}
                        _ => {
                            return Err(
                                self.error(token, format!("Invalid percentage '{text}'"))
                            );
                        }
                    }
                }
                TokenKind::Keyword(_) => {}
                TokenKind::Other(_) => {
                    return Err(self.error(token, format!("Unknown position value '{text}'")));
                }
            }
        }

        // A stylesheet reads two values as horizontal then vertical.
        if let [first, second] = self.tokens.as_slice() {
            if let TokenKind::Keyword(keyword) = first.kind {
                if keyword.is_vertical() {
                    return Err(self.error(
                        first,
                        format!(
                            "Vertical keyword '{}' must be the second value",
                            keyword.as_str()
                        ),
                    ));
                }
            }
            if let TokenKind::Keyword(keyword) = second.kind {
                if keyword.is_horizontal() {
                    return Err(self.error(
                        second,
                        format!(
                            "Horizontal keyword '{}' must be the first value",
                            keyword.as_str()
                        ),
                    ));
                }
            }
        }

        Ok(())
    }

    fn error(&self, token: &Token, message: impl Into<String>) -> ParseError {
        ParseError {
            message: message.into(),
            column: token.span.column,
        }
    }
}
