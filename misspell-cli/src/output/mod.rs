//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One transformed input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MisspelledText {
    /// Input name (file path, `<stdin>` or `<text>`)
    pub source: String,
    /// Mode the text was transformed with
    pub mode: String,
    /// Seed of the generator used for this input
    pub seed: u64,
    /// Characters copied through without editing
    pub passthrough: usize,
    /// The misspelled text
    pub text: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single result
    fn format_result(&mut self, result: &MisspelledText) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
