//! Settings file handling
//!
//! A settings file holds the misspelling probabilities, the blacklist and an
//! optional path to an external rule file. Every section is optional and
//! falls back to the built-in defaults.

use crate::error::{CliError, CliResult};
use anyhow::Context;
use misspell_core::{Blacklist, PhonoConfig, ProbabilityConfig, RuleData, TypoConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Parsed settings file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    /// Typographical probabilities
    #[serde(default)]
    pub typo: TypoConfig,

    /// Phonological probabilities
    #[serde(default)]
    pub phono: PhonoConfig,

    /// Words removed from the output
    #[serde(default)]
    pub blacklist: BlacklistSettings,

    /// Rule data location
    #[serde(default)]
    pub rules: RulesSettings,

    /// Directory relative rule paths are resolved against
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

/// Blacklist section
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BlacklistSettings {
    /// Words to remove, matched case-insensitively
    #[serde(default)]
    pub words: Vec<String>,
}

/// Rules section
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RulesSettings {
    /// External rule file; the bundled English rules are used when absent
    pub file: Option<PathBuf>,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        let mut settings = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid settings file: {}", path.display()))?;
        settings.base_dir = path.parent().map(Path::to_path_buf);
        Ok(settings)
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> CliResult<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Validated probability configuration
    pub fn probabilities(&self) -> CliResult<ProbabilityConfig> {
        let config = ProbabilityConfig {
            typo: self.typo,
            phono: self.phono,
        };
        config.validate().map_err(CliError::from)?;
        Ok(config)
    }

    /// Validated blacklist
    pub fn blacklist(&self) -> CliResult<Blacklist> {
        Ok(Blacklist::new(&self.blacklist.words).map_err(CliError::from)?)
    }

    /// Rule file path, resolved against the settings file location
    pub fn rules_path(&self) -> Option<PathBuf> {
        let file = self.rules.file.as_ref()?;
        match &self.base_dir {
            Some(base) if file.is_relative() => Some(base.join(file)),
            _ => Some(file.clone()),
        }
    }

    /// Commented settings file with every default spelled out
    pub fn template() -> String {
        let typo = TypoConfig::default();
        let phono = PhonoConfig::default();
        format!(
            r#"# Misspelling settings
#
# Every probability must lie within [0.0, 1.0]. Within each section the
# delete, insert and replace probabilities are mutually exclusive per
# character or unit, so their sum may not exceed 1.0.

# Keyboard slips applied to the whole text
[typo]
# Chance of dropping each space
delete_space = {}
# Chance of dropping a character
delete_char = {}
# Chance of transposing two adjacent characters
swap = {}
# Chance of adding a neighboring key next to a character
insert = {}
# Chance of hitting a neighboring key instead
replace = {}

# Sound-based edits applied to each word
[phono]
# Chance of dropping a letter or letter group
delete = {}
# Chance of adding a letter or group of the same class
insert = {}
# Chance of replacing a letter or group with one of the same class
replace = {}
# Chance of treating a known letter group ("th", "ee", ...) as one unit
group = {}

# Words removed from the final output, ignoring case
[blacklist]
words = []

# External phonological rules (classes, groups, forbidden sequences)
[rules]
# file = "rules.toml"
"#,
            typo.delete_space,
            typo.delete_char,
            typo.swap,
            typo.insert,
            typo.replace,
            phono.delete,
            phono.insert,
            phono.replace,
            phono.group,
        )
    }
}

/// Load rule data from a file, or the bundled English rules
pub fn load_rules(path: Option<&Path>) -> CliResult<RuleData> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.display().to_string()).into());
            }
            Ok(RuleData::from_file(path).map_err(CliError::from)?)
        }
        None => Ok(RuleData::english().map_err(CliError::from)?.clone()),
    }
}
