//! Overlap-chain reassembly of fixed-width numeric tokens
//!
//! Given an unordered set of fixed-width digit strings, this crate
//! reconstructs the longest chain in which each token's trailing half
//! equals the next token's leading half. The pipeline builds a directed
//! overlap graph, picks a plausible chain terminus, runs a breadth-first
//! longest-path heuristic, greedily splices leftover tokens onto the
//! chain ends, validates the result, and merges it into the single digit
//! string it represents.
//!
//! The reconstruction is heuristic by design: it favors the longest path
//! the bounded breadth-first search finds, then patches up greedily. It
//! does not promise a globally optimal or unique chain.
//!
//! # Example
//!
//! ```rust
//! use fraglink_core::{ChainAssembler, Token};
//!
//! let tokens: Vec<Token> = ["789012", "123456", "456789"]
//!     .iter()
//!     .map(|s| Token::new(*s).unwrap())
//!     .collect();
//!
//! let assembly = ChainAssembler::new().assemble(&tokens).unwrap();
//! assert!(assembly.verdict.is_valid());
//! assert_eq!(assembly.merged, "123456789012");
//! ```

#![warn(missing_docs)]

pub mod assembler;
pub mod completer;
pub mod error;
pub mod explorer;
pub mod graph;
pub mod merger;
pub mod token;
pub mod validator;

// Re-export key types
pub use assembler::{
    check_token_set, Assembly, AssemblyMetadata, AssemblerConfig, ChainAssembler,
};
pub use completer::complete_sequence;
pub use error::{AssembleError, TokenError};
pub use explorer::{find_longest_path, Exploration, PathExplorer};
pub use graph::OverlapGraph;
pub use merger::merge_sequence;
pub use token::Token;
pub use validator::{validate_sequence, Verdict};
