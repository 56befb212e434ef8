//! Command-line entry point for misspell

use clap::Parser;
use misspell_cli::commands::Commands;

/// Introduce slight, plausible misspellings into text
#[derive(Debug, Parser)]
#[command(name = "misspell", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
