//! JSON output formatter

use super::{MisspelledText, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs results as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    results: Vec<MisspelledText>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            results: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_result(&mut self, result: &MisspelledText) -> Result<()> {
        self.results.push(result.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.results)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
