//! Adjacent-pair validation of a finished chain

use crate::token::Token;

/// Outcome of validating a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every adjacent pair satisfies the overlap relation.
    Valid,
    /// The pair at (`index`, `index + 1`) is the first violation.
    Invalid {
        /// Index of the left element of the failing pair.
        index: usize,
    },
}

impl Verdict {
    /// Whether the sequence validated cleanly.
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// Left index of the first failing pair, if any.
    pub fn failing_index(&self) -> Option<usize> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid { index } => Some(*index),
        }
    }
}

/// Scan adjacent pairs in order and report the first violation.
///
/// Empty and single-token sequences are trivially valid. Pure; the input
/// is never mutated.
pub fn validate_sequence(seq: &[Token]) -> Verdict {
    for (index, pair) in seq.windows(2).enumerate() {
        if !pair[0].chains_to(&pair[1]) {
            return Verdict::Invalid { index };
        }
    }
    Verdict::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(literals: &[&str]) -> Vec<Token> {
        literals.iter().map(|s| Token::new(*s).unwrap()).collect()
    }

    #[test]
    fn empty_and_singleton_are_valid() {
        assert_eq!(validate_sequence(&[]), Verdict::Valid);
        assert_eq!(validate_sequence(&tokens(&["123456"])), Verdict::Valid);
    }

    #[test]
    fn accepts_an_overlapping_chain() {
        let seq = tokens(&["123456", "456789", "789012"]);
        let verdict = validate_sequence(&seq);
        assert!(verdict.is_valid());
        assert_eq!(verdict.failing_index(), None);
    }

    #[test]
    fn reports_first_failing_pair() {
        let seq = tokens(&["123456", "456789", "555555", "789012"]);
        let verdict = validate_sequence(&seq);
        assert_eq!(verdict, Verdict::Invalid { index: 1 });
        assert_eq!(verdict.failing_index(), Some(1));
    }

    #[test]
    fn reports_break_at_position_zero() {
        let seq = tokens(&["111111", "222222"]);
        assert_eq!(validate_sequence(&seq), Verdict::Invalid { index: 0 });
    }
}
