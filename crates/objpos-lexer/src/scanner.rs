//! Scanner for `object-position` values.
//!
//! Splits a value on the space character and classifies every piece. Only
//! U+0020 separates tokens, so consecutive spaces produce `Empty` tokens and
//! other whitespace stays inside the token it appears in.

use crate::number::parse_leading_float;
use crate::token::{PositionKeyword, Span, Token, TokenKind};

/// Position value scanner.
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    column: usize,
    done: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            column: 1,
            done: false,
        }
    }

    /// Tokenize a whole value.
    ///
    /// Always yields at least one token: the empty string scans to a single
    /// `Empty` token.
    pub fn tokenize(source: &str) -> Vec<Token> {
        Scanner::new(source).collect()
    }

    /// Classify a single piece of a value.
    pub fn classify(text: &str) -> TokenKind {
        if text.ends_with('%') {
            return TokenKind::Percentage(parse_leading_float(text) / 100.0);
        }
        if text.is_empty() {
            return TokenKind::Empty;
        }
        match PositionKeyword::lookup(text) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Other(text.to_string()),
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }

        let rest = &self.source[self.pos..];
        let len = match rest.find(' ') {
            Some(idx) => idx,
            None => {
                self.done = true;
                rest.len()
            }
        };

        let text = &rest[..len];
        let span = Span::new(self.pos, self.pos + len, self.column);

        // Skip the token and its trailing separator.
        self.pos += len + 1;
        self.column += text.chars().count() + 1;

        Some(Token::new(Scanner::classify(text), span))
    }
}
