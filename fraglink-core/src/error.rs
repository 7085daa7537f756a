//! Core error types

use crate::token::Token;
use thiserror::Error;

/// Per-token literal validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Literal contains something other than ASCII digits
    #[error("token '{0}' must contain only ASCII digits")]
    NotNumeric(String),

    /// Width is odd or below the minimum of 2
    #[error("token width must be an even number of at least 2, got {0}")]
    BadWidth(usize),
}

/// Token-set validation errors surfaced by the assembler
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssembleError {
    /// The input token set is empty
    #[error("token set is empty")]
    EmptyInput,

    /// Not all tokens share the same width
    #[error("mixed token widths: expected {expected}, token '{token}' has width {found}")]
    MixedWidths {
        /// Width of the first token in the set
        expected: usize,
        /// Width of the offending token
        found: usize,
        /// The offending token
        token: Token,
    },

    /// The same literal appears more than once
    #[error("duplicate token '{0}'")]
    DuplicateToken(Token),
}

/// Result type for assembler operations
pub type Result<T> = std::result::Result<T, AssembleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offender() {
        let err = TokenError::NotNumeric("12x456".to_string());
        assert_eq!(err.to_string(), "token '12x456' must contain only ASCII digits");

        let err = AssembleError::DuplicateToken(Token::new("123456").unwrap());
        assert_eq!(err.to_string(), "duplicate token '123456'");

        let err = AssembleError::MixedWidths {
            expected: 6,
            found: 4,
            token: Token::new("1234").unwrap(),
        };
        assert!(err.to_string().contains("expected 6"));
        assert!(err.to_string().contains("'1234'"));
    }
}
