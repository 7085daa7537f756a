//! Token file reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use fraglink_core::Token;
use std::fs;
use std::path::Path;

/// Reader for line-oriented token files.
///
/// The file contract follows the original data source: a `.txt` file with
/// one fixed-width digit token per line. Per-line literal validation
/// happens here, with 1-based line numbers in error messages; set-level
/// checks (width consistency, duplicates) are the assembler's job.
pub struct TokenFileReader;

impl TokenFileReader {
    /// Read and parse every line of `path` into tokens.
    pub fn read_tokens(path: &Path) -> Result<Vec<Token>> {
        Self::check_extension(path)?;

        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        content
            .lines()
            .enumerate()
            .map(|(i, line)| {
                Token::new(line).map_err(|e| {
                    CliError::InvalidToken {
                        line: i + 1,
                        message: e.to_string(),
                    }
                    .into()
                })
            })
            .collect()
    }

    /// Write a chain back out, one token per line.
    pub fn write_tokens(path: &Path, tokens: &[Token]) -> Result<()> {
        let mut content = String::new();
        for token in tokens {
            content.push_str(token.as_str());
            content.push('\n');
        }
        fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }

    fn check_extension(path: &Path) -> Result<()> {
        match path.extension() {
            Some(ext) if ext == "txt" => Ok(()),
            _ => Err(CliError::InvalidExtension(path.display().to_string()).into()),
        }
    }
}
