//! Plain text output formatter

use super::{MisspelledText, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs each misspelled text as-is
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_result(&mut self, result: &MisspelledText) -> Result<()> {
        write!(self.writer, "{}", result.text)?;
        // Keep consecutive inputs on separate lines
        if !result.text.is_empty() && !result.text.ends_with('\n') {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
