//! Pipeline orchestration
//!
//! [`ChainAssembler`] threads a token set through graph construction,
//! start selection, path exploration, greedy completion, validation, and
//! the final merge. All state flows through arguments and return values;
//! nothing lives outside a single `assemble` call.

use crate::completer::complete_sequence;
use crate::error::{AssembleError, Result};
use crate::explorer::PathExplorer;
use crate::graph::OverlapGraph;
use crate::merger::merge_sequence;
use crate::token::Token;
use crate::validator::{validate_sequence, Verdict};
use std::collections::HashSet;

/// Assembler configuration.
#[derive(Debug, Clone, Default)]
pub struct AssemblerConfig {
    /// Maximum explorer dequeue count; `None` runs unbounded.
    pub step_budget: Option<usize>,
}

impl AssemblerConfig {
    /// Default configuration: unbounded exploration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the explorer at `steps` dequeues, truncating to the best path
    /// found when the budget runs out.
    pub fn step_budget(mut self, steps: usize) -> Self {
        self.step_budget = Some(steps);
        self
    }
}

/// Counters describing one assembly run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyMetadata {
    /// Tokens in the input set.
    pub total_tokens: usize,
    /// Tokens placed in the final chain.
    pub placed: usize,
    /// Tokens the completer could not splice (silently dropped).
    pub dropped: usize,
    /// Explorer dequeue count.
    pub explorer_steps: usize,
    /// Whether the step budget truncated the exploration.
    pub truncated: bool,
}

/// Result of one assembly run.
///
/// `merged` is always computed; callers deciding whether to persist the
/// chain must gate on `verdict` themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    /// The final chain, head first.
    pub chain: Vec<Token>,
    /// The de-overlapped digit string the chain represents.
    pub merged: String,
    /// Adjacent-pair validation outcome for `chain`.
    pub verdict: Verdict,
    /// Run counters.
    pub metadata: AssemblyMetadata,
}

/// The reassembly pipeline.
#[derive(Debug, Clone, Default)]
pub struct ChainAssembler {
    config: AssemblerConfig,
}

impl ChainAssembler {
    /// Assembler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembler with explicit configuration.
    pub fn with_config(config: AssemblerConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline over `tokens`.
    ///
    /// Set-level validation happens first: the set must be non-empty,
    /// share one width, and contain no duplicate literals. Past that
    /// gate every stage is total; an overlap-broken result surfaces as
    /// an `Invalid` verdict in the returned [`Assembly`], never as an
    /// error.
    pub fn assemble(&self, tokens: &[Token]) -> Result<Assembly> {
        check_token_set(tokens)?;

        let graph = OverlapGraph::build(tokens);
        // check_token_set rejected the empty set, so a start exists.
        let start = match graph.select_start() {
            Some(start) => start.clone(),
            None => return Err(AssembleError::EmptyInput),
        };

        let explorer = match self.config.step_budget {
            Some(steps) => PathExplorer::with_step_budget(steps),
            None => PathExplorer::new(),
        };
        let exploration = explorer.explore(&graph, &start);

        let chain = complete_sequence(tokens, exploration.path);
        let verdict = validate_sequence(&chain);
        let merged = merge_sequence(&chain);

        let metadata = AssemblyMetadata {
            total_tokens: tokens.len(),
            placed: chain.len(),
            dropped: tokens.len() - chain.len(),
            explorer_steps: exploration.steps,
            truncated: exploration.truncated,
        };

        Ok(Assembly {
            chain,
            merged,
            verdict,
            metadata,
        })
    }
}

/// Reject empty sets, mixed widths, and duplicate literals.
///
/// Duplicates are rejected outright: the graph keys vertices by literal
/// value, so duplicate tokens have no well-defined behavior downstream.
pub fn check_token_set(tokens: &[Token]) -> Result<()> {
    let Some(first) = tokens.first() else {
        return Err(AssembleError::EmptyInput);
    };
    let expected = first.width();

    let mut seen: HashSet<&Token> = HashSet::with_capacity(tokens.len());
    for token in tokens {
        if token.width() != expected {
            return Err(AssembleError::MixedWidths {
                expected,
                found: token.width(),
                token: token.clone(),
            });
        }
        if !seen.insert(token) {
            return Err(AssembleError::DuplicateToken(token.clone()));
        }
    }
    Ok(())
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
    fn assembles_a_full_chain() {
        let set = tokens(&["789012", "123456", "456789"]);
        let assembly = ChainAssembler::new().assemble(&set).unwrap();

        assert_eq!(
            literals(&assembly.chain),
            vec!["123456", "456789", "789012"]
        );
        assert_eq!(assembly.merged, "123456789012");
        assert!(assembly.verdict.is_valid());
        assert_eq!(assembly.metadata.total_tokens, 3);
        assert_eq!(assembly.metadata.placed, 3);
        assert_eq!(assembly.metadata.dropped, 0);
        assert!(!assembly.metadata.truncated);
    }

    #[test]
    fn disconnected_token_is_dropped() {
        let set = tokens(&["111111", "222222"]);
        let assembly = ChainAssembler::new().assemble(&set).unwrap();

        assert_eq!(literals(&assembly.chain), vec!["111111"]);
        assert!(assembly.verdict.is_valid());
        assert_eq!(assembly.metadata.placed, 1);
        assert_eq!(assembly.metadata.dropped, 1);
    }

    #[test]
    fn rejects_empty_input() {
        let err = ChainAssembler::new().assemble(&[]).unwrap_err();
        assert_eq!(err, AssembleError::EmptyInput);
    }

    #[test]
    fn rejects_mixed_widths() {
        let set = vec![
            Token::new("123456").unwrap(),
            Token::new("1234").unwrap(),
        ];
        let err = ChainAssembler::new().assemble(&set).unwrap_err();
        assert!(matches!(err, AssembleError::MixedWidths { expected: 6, found: 4, .. }));
    }

    #[test]
    fn rejects_duplicate_literals() {
        let set = tokens(&["123456", "456789", "123456"]);
        let err = ChainAssembler::new().assemble(&set).unwrap_err();
        assert_eq!(
            err,
            AssembleError::DuplicateToken(Token::new("123456").unwrap())
        );
    }

    #[test]
    fn step_budget_flows_through_to_the_explorer() {
        let set = tokens(&["123456", "456789", "789012"]);
        let config = AssemblerConfig::new().step_budget(1);
        let assembly = ChainAssembler::with_config(config).assemble(&set).unwrap();

        assert!(assembly.metadata.truncated);
        assert_eq!(assembly.metadata.explorer_steps, 1);
        // Completion still splices what it can onto the truncated path.
        assert!(assembly.metadata.placed >= 1);
        assert!(assembly.verdict.is_valid());
    }
}
