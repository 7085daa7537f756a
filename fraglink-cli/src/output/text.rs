//! Plain text output formatter

use super::{AssemblyReport, ReportFormatter};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - outputs a human summary followed by the chain,
/// one token per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn write_report(&mut self, report: &AssemblyReport) -> Result<()> {
        writeln!(
            self.writer,
            "Total tokens: {} (placed {}, dropped {})",
            report.total_tokens, report.placed, report.dropped
        )?;
        writeln!(self.writer, "Sequence is valid: {}", report.valid)?;
        if let Some(index) = report.error_index {
            writeln!(
                self.writer,
                "Error at index {}: {} -> {}",
                index,
                report.chain[index],
                report.chain[index + 1]
            )?;
        }
        if report.truncated {
            writeln!(
                self.writer,
                "Exploration truncated: chain may be shorter than achievable"
            )?;
        }
        writeln!(self.writer, "Merged sequence: {}", report.merged)?;
        for token in &report.chain {
            writeln!(self.writer, "{token}")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
