//! CLI command implementations

use crate::error::CliResult;
use clap::Subcommand;

pub mod assemble;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reassemble a token file into its longest overlap chain
    Assemble(assemble::AssembleArgs),

    /// Check a token file without assembling it
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Assemble(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// Initialize logging from the verbosity count
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}
