//! Configuration structures and validation
//!
//! This module defines the TOML schema for phonological rule data.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Root rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    pub metadata: Metadata,
    pub classes: Classes,
    #[serde(default)]
    pub groups: Groups,
    #[serde(default)]
    pub forbidden: Forbidden,
}

/// Rule set metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Vowel/consonant partition, each written as a string of letters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classes {
    pub vowels: String,
    pub consonants: String,
}

/// Two-character units kept together during segmentation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Groups {
    #[serde(default)]
    pub pairs: Vec<String>,
}

/// Forbidden substrings by word position
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Forbidden {
    /// Never allowed to begin a word
    #[serde(default)]
    pub start: Vec<String>,
    /// Never allowed inside a word
    #[serde(default)]
    pub middle: Vec<String>,
    /// Never allowed to end a word
    #[serde(default)]
    pub end: Vec<String>,
}

impl RulesConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("Rule set code must not be empty".to_string());
        }

        let vowels = letter_set("vowels", &self.classes.vowels)?;
        let consonants = letter_set("consonants", &self.classes.consonants)?;
        if let Some(ch) = vowels.intersection(&consonants).next() {
            return Err(format!("'{ch}' is classified as both vowel and consonant"));
        }

        let mut seen = HashSet::new();
        for pair in &self.groups.pairs {
            let chars: Vec<char> = pair.chars().collect();
            if chars.len() != 2 {
                return Err(format!(
                    "Character group {pair:?} must contain exactly two characters"
                ));
            }
            for ch in &chars {
                if !vowels.contains(ch) && !consonants.contains(ch) {
                    return Err(format!(
                        "Character group {pair:?} uses '{ch}', which is neither vowel nor consonant"
                    ));
                }
            }
            if !seen.insert(pair.as_str()) {
                return Err(format!("Duplicate character group {pair:?}"));
            }
        }

        for (position, entries) in [
            ("start", &self.forbidden.start),
            ("middle", &self.forbidden.middle),
            ("end", &self.forbidden.end),
        ] {
            for entry in entries {
                if entry.is_empty() {
                    return Err(format!("Empty forbidden substring in '{position}' list"));
                }
                if !entry.chars().all(|c| c.is_ascii_lowercase()) {
                    return Err(format!(
                        "Forbidden substring {entry:?} in '{position}' list must be lowercase ASCII letters"
                    ));
                }
            }
        }

        Ok(())
    }
}

fn letter_set(name: &str, letters: &str) -> Result<HashSet<char>, String> {
    if letters.is_empty() {
        return Err(format!("No {name} defined"));
    }

    let mut set = HashSet::new();
    for ch in letters.chars() {
        if !ch.is_ascii_lowercase() {
            return Err(format!("Invalid character {ch:?} in {name}: expected a-z"));
        }
        if !set.insert(ch) {
            return Err(format!("Duplicate character '{ch}' in {name}"));
        }
    }
    Ok(set)
}
