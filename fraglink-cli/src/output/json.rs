//! JSON output formatter

use super::{AssemblyReport, ReportFormatter};
use anyhow::Result;
use std::io::{self, Write};

/// JSON formatter - outputs the full report as a pretty-printed object
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl JsonFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ReportFormatter for JsonFormatter<W> {
    fn write_report(&mut self, report: &AssemblyReport) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
