//! Greedy completion of a discovered chain
//!
//! Tokens the explorer left out get one chance each, in sorted literal
//! order, to splice onto either end of the chain. No backtracking:
//! a token matching neither end at its turn is dropped, even if a later
//! splice would have made room for it. Silent drops are a documented
//! simplification of this heuristic, not an error.

use crate::token::Token;
use std::collections::HashSet;

/// Splice leftover tokens onto the ends of `chain`.
///
/// Remaining tokens are processed once, in ascending literal order. Each
/// is appended when its leading half matches the current last token, else
/// prepended when its trailing half matches the current first token, else
/// left out. Ends are re-evaluated after every successful splice. An
/// empty chain is returned unchanged.
pub fn complete_sequence(all_tokens: &[Token], chain: Vec<Token>) -> Vec<Token> {
    let mut chain = chain;
    if chain.is_empty() {
        return chain;
    }

    let mut remaining: Vec<Token> = {
        let used: HashSet<&Token> = chain.iter().collect();
        all_tokens
            .iter()
            .filter(|t| !used.contains(t))
            .cloned()
            .collect()
    };
    remaining.sort();

    for token in remaining {
        if chain.last().is_some_and(|last| last.chains_to(&token)) {
            chain.push(token);
        } else if chain.first().is_some_and(|first| token.chains_to(first)) {
            chain.insert(0, token);
        }
    }

    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(literals: &[&str]) -> Vec<Token> {
        literals.iter().map(|s| Token::new(*s).unwrap()).collect()
    }

    fn literals(chain: &[Token]) -> Vec<&str> {
        chain.iter().map(Token::as_str).collect()
    }

    #[test]
    fn appends_matching_token_at_tail() {
        let all = tokens(&["123456", "456789", "789012"]);
        let chain = tokens(&["123456", "456789"]);
        let completed = complete_sequence(&all, chain);
        assert_eq!(literals(&completed), vec!["123456", "456789", "789012"]);
    }

    #[test]
    fn prepends_matching_token_at_head() {
        let all = tokens(&["999123", "123456", "456789"]);
        let chain = tokens(&["123456", "456789"]);
        let completed = complete_sequence(&all, chain);
        assert_eq!(literals(&completed), vec!["999123", "123456", "456789"]);
    }

    #[test]
    fn drops_token_matching_neither_end() {
        let all = tokens(&["123456", "456789", "555555"]);
        let chain = tokens(&["123456", "456789"]);
        let completed = complete_sequence(&all, chain);
        assert_eq!(literals(&completed), vec!["123456", "456789"]);
    }

    #[test]
    fn reevaluates_ends_after_each_splice() {
        // 789012 only fits after 456789 extends the tail; sorted order
        // processes 456789 first, so both land.
        let all = tokens(&["123456", "456789", "789012"]);
        let chain = tokens(&["123456"]);
        let completed = complete_sequence(&all, chain);
        assert_eq!(literals(&completed), vec!["123456", "456789", "789012"]);
    }

    #[test]
    fn no_retry_once_a_token_is_passed_over() {
        // Sorted order tests 777888 before 888123; at that point the
        // head is 123456 and the tail 456789, so 777888 fits neither.
        // 888123 then prepends and would have made room, but 777888 is
        // not retried.
        let all = tokens(&["123456", "456789", "888123", "777888"]);
        let chain = tokens(&["123456", "456789"]);
        let completed = complete_sequence(&all, chain);
        assert_eq!(literals(&completed), vec!["888123", "123456", "456789"]);
    }

    #[test]
    fn empty_chain_is_returned_unchanged() {
        let all = tokens(&["123456"]);
        assert!(complete_sequence(&all, Vec::new()).is_empty());
    }

    #[test]
    fn full_chain_has_nothing_to_place() {
        let all = tokens(&["123456", "456789"]);
        let chain = all.clone();
        assert_eq!(complete_sequence(&all, chain), all);
    }
}
