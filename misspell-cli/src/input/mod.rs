//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::fmt;
use std::path::PathBuf;

/// Where a piece of input text comes from
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InputSource {
    /// Text given directly on the command line
    Inline(String),
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Read the full text of this source
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Inline(text) => Ok(text.clone()),
            InputSource::Stdin => FileReader::read_stdin(),
            InputSource::File(path) => FileReader::read_text(path),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Inline(_) => f.write_str("<text>"),
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
