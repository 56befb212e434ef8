//! Generate config command implementation

use crate::config::Settings;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating settings template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Settings::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Settings template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the probabilities and blacklist");
        println!("2. Validate your settings:");
        println!("   misspell validate --settings {}", self.output.display());
        println!("3. Use them for processing:");
        println!(
            "   misspell process -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}
