//! Fixed-width numeric token type
//!
//! A [`Token`] is an immutable digit string of even width. Its identity is
//! its literal value; the trailing and leading halves drive the overlap
//! relation used everywhere else in the crate.

use crate::error::TokenError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable fixed-width digit string.
///
/// Construction validates the literal once; all downstream code may assume
/// well-formedness (ASCII digits, even width >= 2). Ordering and equality
/// follow the literal value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Token(String);

impl Token {
    /// Create a token from a digit literal.
    ///
    /// Rejects non-ASCII-digit content and widths that are odd or below 2.
    pub fn new(literal: impl Into<String>) -> Result<Self, TokenError> {
        let literal = literal.into();
        if !literal.chars().all(|c| c.is_ascii_digit()) {
            return Err(TokenError::NotNumeric(literal));
        }
        if literal.len() < 2 || literal.len() % 2 != 0 {
            return Err(TokenError::BadWidth(literal.len()));
        }
        Ok(Self(literal))
    }

    /// The token literal.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Total width in digits.
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// The overlap width: half the token width.
    pub fn half_width(&self) -> usize {
        self.0.len() / 2
    }

    /// The leading half of the literal.
    pub fn head(&self) -> &str {
        &self.0[..self.half_width()]
    }

    /// The trailing half of the literal.
    pub fn tail(&self) -> &str {
        &self.0[self.half_width()..]
    }

    /// The overlap relation: `self` chains to `next` when `self`'s trailing
    /// half equals `next`'s leading half. A token never chains to itself.
    pub fn chains_to(&self, next: &Token) -> bool {
        self != next && self.tail() == next.head()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Token {
    type Error = TokenError;

    fn try_from(literal: String) -> Result<Self, Self::Error> {
        Token::new(literal)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> String {
        token.0
    }
}
