//! Runtime rule data
//!
//! Bridges the TOML configuration and the lookup tables used while
//! transforming words.

use crate::error::{MisspellError, Result};
use crate::rules::config::RulesConfig;
use crate::rules::tables::{CharClass, ClassTable, ForbiddenTable, GroupTable};
use smallvec::SmallVec;
use std::path::Path;

/// Letters of a candidate unit
pub type UnitChars = SmallVec<[char; 2]>;

/// Validated phonological rule data
#[derive(Debug, Clone)]
pub struct RuleData {
    code: String,
    name: String,

    classes: ClassTable,
    groups: GroupTable,
    forbidden: ForbiddenTable,

    /// Insert/replace candidates per class: single letters, then groups
    vowel_candidates: Vec<UnitChars>,
    consonant_candidates: Vec<UnitChars>,
}

impl RuleData {
    /// Create rule data from configuration
    pub fn from_config(config: &RulesConfig) -> Result<Self> {
        config.validate().map_err(MisspellError::InvalidRules)?;

        let classes = ClassTable::new(&config.classes.vowels, &config.classes.consonants);
        let groups = GroupTable::new(&config.groups.pairs);
        let forbidden = ForbiddenTable::new(
            config.forbidden.start.clone(),
            config.forbidden.middle.clone(),
            config.forbidden.end.clone(),
        );

        let vowel_candidates = candidates(&classes, &groups, CharClass::Vowel);
        let consonant_candidates = candidates(&classes, &groups, CharClass::Consonant);

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            classes,
            groups,
            forbidden,
            vowel_candidates,
            consonant_candidates,
        })
    }

    /// Parse and validate rule data from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RulesConfig = toml::from_str(content).map_err(|e| {
            MisspellError::Configuration(format!("Failed to parse rule data: {e}"))
        })?;
        Self::from_config(&config)
    }

    /// Load rule data from an external TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MisspellError::Configuration(format!(
                "Failed to read file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: RulesConfig = toml::from_str(&content).map_err(|e| {
            MisspellError::Configuration(format!(
                "Failed to parse TOML from '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_config(&config)
    }

    /// Rule set code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Rule set display name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classes(&self) -> &ClassTable {
        &self.classes
    }

    pub fn groups(&self) -> &GroupTable {
        &self.groups
    }

    pub fn forbidden(&self) -> &ForbiddenTable {
        &self.forbidden
    }

    /// Candidate units for insertion or replacement within a class
    pub fn candidates(&self, class: CharClass) -> &[UnitChars] {
        match class {
            CharClass::Vowel => &self.vowel_candidates,
            CharClass::Consonant => &self.consonant_candidates,
        }
    }

    /// Class shared by every character of a unit, judged by its first letter
    ///
    /// Returns `None` if any character lies outside the partition; such
    /// units are never edited.
    pub fn unit_class(&self, chars: &[char]) -> Option<CharClass> {
        let first = self.classes.class_of(*chars.first()?)?;
        chars
            .iter()
            .all(|&c| self.classes.class_of(c).is_some())
            .then_some(first)
    }
}

fn candidates(classes: &ClassTable, groups: &GroupTable, class: CharClass) -> Vec<UnitChars> {
    let singles = classes
        .members(class)
        .iter()
        .map(|&c| SmallVec::from_slice(&[c]));
    let pairs = groups
        .iter()
        .filter(|&(first, _)| classes.class_of(first) == Some(class))
        .map(|(first, second)| SmallVec::from_slice(&[first, second]));
    singles.chain(pairs).collect()
}
