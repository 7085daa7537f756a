//! Validate command implementation

use crate::error::CliResult;
use crate::input::TokenFileReader;
use clap::Args;
use std::path::PathBuf;

use fraglink_core::{check_token_set, validate_sequence};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Input token file (.txt, one fixed-width digit token per line)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ValidateArgs {
    /// Execute the validate command
    ///
    /// Checks the boundary contract: readable `.txt` file, well-formed
    /// digit tokens, uniform width, no duplicates. Additionally reports
    /// whether the file order already forms a valid chain; a broken
    /// order is informational, not an error.
    pub fn execute(&self) -> CliResult<()> {
        super::init_logging(self.verbose, self.quiet);

        let tokens = TokenFileReader::read_tokens(&self.input)?;
        check_token_set(&tokens)?;

        println!("OK: {} tokens, width {}", tokens.len(), tokens[0].width());
        match validate_sequence(&tokens).failing_index() {
            None => println!("File order already forms a valid chain"),
            Some(index) => println!(
                "File order breaks at index {}: {} -> {}",
                index,
                tokens[index],
                tokens[index + 1]
            ),
        }

        Ok(())
    }
}
