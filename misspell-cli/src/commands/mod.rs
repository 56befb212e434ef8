//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use misspell_core::{list_rule_sets, Mode};

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Misspell text, files or standard input
    Process(process::ProcessArgs),

    /// Write a commented settings file with the default probabilities
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a settings file or rule file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List misspelling modes
    Modes,

    /// List bundled rule sets
    Rules,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

impl ListCommands {
    fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Modes => Mode::ALL
                .iter()
                .map(|mode| format!("{} ({}): {}", mode, mode.index(), describe(*mode)))
                .collect(),
            ListCommands::Rules => list_rule_sets()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

fn describe(mode: Mode) -> &'static str {
    match mode {
        Mode::All => "phonological, then typographical, then blacklist",
        Mode::Phonological => "phonological, then blacklist",
        Mode::Typographical => "typographical, then blacklist",
    }
}
