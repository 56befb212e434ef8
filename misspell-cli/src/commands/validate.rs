//! Validate command implementation

use crate::config::{load_rules, Settings};
use anyhow::Result;
use clap::{ArgGroup, Args};
use std::path::{Path, PathBuf};

/// Arguments for the validate command
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("target").required(true).multiple(true).args(["settings", "rules"])))]
pub struct ValidateArgs {
    /// Settings file to validate (also checks the rule file it names)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Rule file to validate
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        if let Some(path) = &self.settings {
            report(&format!("settings: {}", path.display()), || {
                validate_settings(path)
            })?;
        }

        if let Some(path) = &self.rules {
            report(&format!("rules: {}", path.display()), || validate_rules(path))?;
        }

        Ok(())
    }
}

fn validate_settings(path: &Path) -> Result<Vec<String>> {
    let settings = Settings::load(path)?;
    let config = settings.probabilities()?;
    let blacklist = settings.blacklist()?;

    let mut summary = vec![
        format!(
            "Typo: delete_space={} delete_char={} swap={} insert={} replace={}",
            config.typo.delete_space,
            config.typo.delete_char,
            config.typo.swap,
            config.typo.insert,
            config.typo.replace
        ),
        format!(
            "Phono: delete={} insert={} replace={} group={}",
            config.phono.delete, config.phono.insert, config.phono.replace, config.phono.group
        ),
        format!("Blacklisted words: {}", blacklist.len()),
    ];

    if let Some(rules_path) = settings.rules_path() {
        let rules = load_rules(Some(&rules_path))?;
        summary.push(format!(
            "Rule file: {} ({})",
            rules_path.display(),
            rules.code()
        ));
    }

    Ok(summary)
}

fn validate_rules(path: &Path) -> Result<Vec<String>> {
    let rules = load_rules(Some(path))?;
    Ok(vec![
        format!("Rule set code: {}", rules.code()),
        format!("Rule set name: {}", rules.name()),
        format!("Character groups: {}", rules.groups().len()),
    ])
}

fn report<F>(label: &str, check: F) -> Result<()>
where
    F: FnOnce() -> Result<Vec<String>>,
{
    println!("Validating {label}");
    match check() {
        Ok(summary) => {
            println!("✓ Configuration is valid!");
            for line in summary {
                println!("  {line}");
            }
            Ok(())
        }
        Err(e) => {
            println!("✗ Configuration is invalid!");
            println!("  Error: {e:#}");
            Err(anyhow::anyhow!("Validation failed: {:#}", e))
        }
    }
}
