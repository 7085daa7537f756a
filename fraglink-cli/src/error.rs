//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Input file has the wrong extension
    InvalidExtension(String),
    /// A line of the input file is not a valid token
    InvalidToken {
        /// 1-based line number in the input file
        line: usize,
        /// Underlying parse failure
        message: String,
    },
    /// The assembled chain failed validation and cannot be persisted
    InvalidChain {
        /// Left index of the first failing pair
        index: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidExtension(path) => {
                write!(f, "Invalid file format: {path} (expected a .txt file)")
            }
            CliError::InvalidToken { line, message } => {
                write!(f, "Invalid token on line {line}: {message}")
            }
            CliError::InvalidChain { index } => {
                write!(f, "Assembled chain is invalid at index {index}; refusing to write it")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
