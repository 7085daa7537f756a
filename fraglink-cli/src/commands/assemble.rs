//! Assemble command implementation

use crate::error::{CliError, CliResult};
use crate::input::TokenFileReader;
use crate::output::{AssemblyReport, JsonFormatter, ReportFormatter, TextFormatter};
use clap::Args;
use std::path::{Path, PathBuf};

use fraglink_core::{AssemblerConfig, Assembly, ChainAssembler};

/// Arguments for the assemble command
#[derive(Debug, Args)]
pub struct AssembleArgs {
    /// Input token file (.txt, one fixed-width digit token per line)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Write the assembled chain to a file, one token per line
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Print only the merged digit string
    #[arg(long)]
    pub merged: bool,

    /// Cap the path exploration at N dequeued candidates (default: unbounded)
    #[arg(long, value_name = "N")]
    pub max_steps: Option<usize>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// The chain, one token per line
    Text,
    /// Full report as a JSON object
    Json,
}

impl AssembleArgs {
    /// Execute the assemble command
    pub fn execute(&self) -> CliResult<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Assembling chain from {}", self.input.display());
        let tokens = TokenFileReader::read_tokens(&self.input)?;
        log::debug!("Read {} tokens", tokens.len());

        let mut config = AssemblerConfig::new();
        if let Some(steps) = self.max_steps {
            config = config.step_budget(steps);
        }
        let assembly = ChainAssembler::with_config(config).assemble(&tokens)?;

        if assembly.metadata.truncated {
            log::warn!(
                "exploration stopped at the {}-step budget; the chain may be shorter than achievable",
                assembly.metadata.explorer_steps
            );
        }
        match assembly.verdict.failing_index() {
            None => log::info!(
                "placed {} of {} tokens ({} dropped)",
                assembly.metadata.placed,
                assembly.metadata.total_tokens,
                assembly.metadata.dropped
            ),
            Some(index) => log::warn!(
                "assembled chain breaks at index {}: {} -> {}",
                index,
                assembly.chain[index],
                assembly.chain[index + 1]
            ),
        }

        let report = AssemblyReport::from(&assembly);
        if self.merged {
            println!("{}", report.merged);
        } else {
            match self.format {
                OutputFormat::Text => TextFormatter::stdout().write_report(&report)?,
                OutputFormat::Json => JsonFormatter::stdout().write_report(&report)?,
            }
        }

        if let Some(path) = &self.output {
            persist_chain(&assembly, path)?;
        }

        Ok(())
    }
}

/// Write the assembled chain to `path`, one token per line.
///
/// An invalid chain is never persisted; the caller gets a typed error
/// instead and the file is left untouched.
fn persist_chain(assembly: &Assembly, path: &Path) -> CliResult<()> {
    if let Some(index) = assembly.verdict.failing_index() {
        return Err(CliError::InvalidChain { index }.into());
    }
    TokenFileReader::write_tokens(path, &assembly.chain)?;
    log::info!("Chain written to {}", path.display());
    Ok(())
}
