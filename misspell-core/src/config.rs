//! Probability configuration for both transformers

use crate::error::{MisspellError, Result};
use serde::{Deserialize, Serialize};

/// Default probabilities
pub mod defaults {
    /// Chance to delete any space character
    pub const TYPO_DELETE_SPACE: f64 = 0.005;
    /// Chance to delete any non-whitespace character
    pub const TYPO_DELETE_CHAR: f64 = 0.0075;
    /// Chance to swap a pair of adjacent characters
    pub const TYPO_SWAP: f64 = 0.0075;
    /// Chance to insert a character from an adjacent key
    pub const TYPO_INSERT: f64 = 0.001;
    /// Chance to mistype a character as an adjacent key
    pub const TYPO_REPLACE: f64 = 0.0025;

    /// Chance to delete a unit
    pub const PHONO_DELETE: f64 = 0.0025;
    /// Chance to insert a unit next to another
    pub const PHONO_INSERT: f64 = 0.0025;
    /// Chance to replace a unit
    pub const PHONO_REPLACE: f64 = 0.005;
    /// Chance to treat a known character group as a single unit
    pub const PHONO_GROUP: f64 = 0.9;
}

/// Slack allowed when summing mutually exclusive probabilities
const SUM_TOLERANCE: f64 = 1e-9;

/// Typographical misspelling probabilities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypoConfig {
    /// Chance to delete a space
    pub delete_space: f64,
    /// Chance to delete a non-whitespace character (exclusive with insert/replace)
    pub delete_char: f64,
    /// Chance to swap a pair of adjacent characters in the final pass
    pub swap: f64,
    /// Chance to insert an adjacent key before or after a character
    pub insert: f64,
    /// Chance to replace a character with an adjacent key
    pub replace: f64,
}

impl Default for TypoConfig {
    fn default() -> Self {
        Self {
            delete_space: defaults::TYPO_DELETE_SPACE,
            delete_char: defaults::TYPO_DELETE_CHAR,
            swap: defaults::TYPO_SWAP,
            insert: defaults::TYPO_INSERT,
            replace: defaults::TYPO_REPLACE,
        }
    }
}

impl TypoConfig {
    /// All probabilities zero
    pub fn disabled() -> Self {
        Self {
            delete_space: 0.0,
            delete_char: 0.0,
            swap: 0.0,
            insert: 0.0,
            replace: 0.0,
        }
    }

    /// Mutually exclusive per-character events, in draw order
    pub(crate) fn exclusive(&self) -> [f64; 3] {
        [self.delete_char, self.insert, self.replace]
    }

    fn validate(&self) -> Result<()> {
        check_probability("typo", "delete_space", self.delete_space)?;
        check_probability("typo", "delete_char", self.delete_char)?;
        check_probability("typo", "swap", self.swap)?;
        check_probability("typo", "insert", self.insert)?;
        check_probability("typo", "replace", self.replace)?;
        check_exclusive_sum("typo", &self.exclusive())
    }
}

/// Phonological misspelling probabilities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhonoConfig {
    /// Chance to delete a unit (exclusive with insert/replace)
    pub delete: f64,
    /// Chance to insert a unit before or after another
    pub insert: f64,
    /// Chance to replace a unit with another of the same class
    pub replace: f64,
    /// Chance to segment a known character group as one unit
    pub group: f64,
}

impl Default for PhonoConfig {
    fn default() -> Self {
        Self {
            delete: defaults::PHONO_DELETE,
            insert: defaults::PHONO_INSERT,
            replace: defaults::PHONO_REPLACE,
            group: defaults::PHONO_GROUP,
        }
    }
}

impl PhonoConfig {
    /// All probabilities zero
    pub fn disabled() -> Self {
        Self {
            delete: 0.0,
            insert: 0.0,
            replace: 0.0,
            group: 0.0,
        }
    }

    pub(crate) fn exclusive(&self) -> [f64; 3] {
        [self.delete, self.insert, self.replace]
    }

    fn validate(&self) -> Result<()> {
        check_probability("phono", "delete", self.delete)?;
        check_probability("phono", "insert", self.insert)?;
        check_probability("phono", "replace", self.replace)?;
        check_probability("phono", "group", self.group)?;
        check_exclusive_sum("phono", &self.exclusive())
    }
}

/// Complete probability configuration
///
/// Deserializes from the `[typo]` and `[phono]` tables of a settings file;
/// a missing table or key falls back to its default.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProbabilityConfig {
    /// Typographical probabilities
    #[serde(default)]
    pub typo: TypoConfig,
    /// Phonological probabilities
    #[serde(default)]
    pub phono: PhonoConfig,
}

impl ProbabilityConfig {
    /// Create a configuration builder
    pub fn builder() -> ProbabilityConfigBuilder {
        ProbabilityConfigBuilder::default()
    }

    /// Configuration with every probability set to zero
    pub fn disabled() -> Self {
        Self {
            typo: TypoConfig::disabled(),
            phono: PhonoConfig::disabled(),
        }
    }

    /// Validate the configuration
    ///
    /// Values are never clamped: any probability outside [0.0, 1.0] and any
    /// exclusive group summing above 1.0 is rejected.
    pub fn validate(&self) -> Result<()> {
        self.typo.validate()?;
        self.phono.validate()
    }

    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| MisspellError::Configuration(format!("Failed to parse TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn check_probability(section: &'static str, key: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(MisspellError::ProbabilityOutOfRange {
            section,
            key,
            value,
        })
    }
}

fn check_exclusive_sum(section: &'static str, values: &[f64]) -> Result<()> {
    let sum: f64 = values.iter().sum();
    if sum > 1.0 + SUM_TOLERANCE {
        return Err(MisspellError::ExclusiveSumExceeded { section, sum });
    }
    Ok(())
}

/// Fluent builder for [`ProbabilityConfig`]
#[derive(Debug, Default)]
pub struct ProbabilityConfigBuilder {
    typo: Option<TypoConfig>,
    phono: Option<PhonoConfig>,
}

impl ProbabilityConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the typographical probabilities
    pub fn typo(mut self, typo: TypoConfig) -> Self {
        self.typo = Some(typo);
        self
    }

    /// Set the phonological probabilities
    pub fn phono(mut self, phono: PhonoConfig) -> Self {
        self.phono = Some(phono);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ProbabilityConfig> {
        let config = ProbabilityConfig {
            typo: self.typo.unwrap_or_default(),
            phono: self.phono.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}
