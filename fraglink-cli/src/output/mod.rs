//! Output formatting module

use anyhow::Result;
use fraglink_core::Assembly;
use serde::{Deserialize, Serialize};

/// Flattened, serializable view of an assembly run.
#[derive(Debug, Serialize, Deserialize)]
pub struct AssemblyReport {
    /// Final chain, head first
    pub chain: Vec<String>,
    /// De-overlapped digit string
    pub merged: String,
    /// Whether every adjacent pair overlaps
    pub valid: bool,
    /// Left index of the first failing pair, when invalid
    pub error_index: Option<usize>,
    /// Tokens in the input set
    pub total_tokens: usize,
    /// Tokens placed in the chain
    pub placed: usize,
    /// Tokens the completer dropped
    pub dropped: usize,
    /// Whether the explorer step budget truncated the search
    pub truncated: bool,
}

impl From<&Assembly> for AssemblyReport {
    fn from(assembly: &Assembly) -> Self {
        Self {
            chain: assembly.chain.iter().map(|t| t.as_str().to_string()).collect(),
            merged: assembly.merged.clone(),
            valid: assembly.verdict.is_valid(),
            error_index: assembly.verdict.failing_index(),
            total_tokens: assembly.metadata.total_tokens,
            placed: assembly.metadata.placed,
            dropped: assembly.metadata.dropped,
            truncated: assembly.metadata.truncated,
        }
    }
}

/// Trait for report formatters
pub trait ReportFormatter {
    /// Format and write a full assembly report
    fn write_report(&mut self, report: &AssemblyReport) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

#[cfg(test)]
mod tests {
    use super::*;
    use fraglink_core::{ChainAssembler, Token};

    #[test]
    fn report_flattens_the_assembly() {
        let tokens: Vec<Token> = ["123456", "456789"]
            .iter()
            .map(|s| Token::new(*s).unwrap())
            .collect();
        let assembly = ChainAssembler::new().assemble(&tokens).unwrap();
        let report = AssemblyReport::from(&assembly);

        assert_eq!(report.chain, vec!["123456", "456789"]);
        assert_eq!(report.merged, "123456789");
        assert!(report.valid);
        assert_eq!(report.error_index, None);
        assert_eq!(report.total_tokens, 2);
        assert_eq!(report.dropped, 0);
    }
}
