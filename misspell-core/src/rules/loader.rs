//! Embedded rule set loader
//!
//! Parses the bundled rule sets once and hands out shared references.

use crate::error::{MisspellError, Result};
use crate::rules::runtime::RuleData;
use std::collections::HashMap;
use std::sync::OnceLock;

static EMBEDDED: OnceLock<HashMap<&'static str, Result<RuleData>>> = OnceLock::new();

macro_rules! embed_rule_set {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

fn load_embedded_rules() -> HashMap<&'static str, Result<RuleData>> {
    let embedded = [embed_rule_set!("en", "../../configs/rules/english.toml")];

    embedded
        .into_iter()
        .map(|(code, toml_content)| {
            let rules = RuleData::from_toml_str(toml_content).and_then(|rules| {
                if rules.code() == code {
                    Ok(rules)
                } else {
                    Err(MisspellError::Configuration(format!(
                        "Rule set code mismatch: expected {}, got {}",
                        code,
                        rules.code()
                    )))
                }
            });
            (code, rules)
        })
        .collect()
}

/// Look up a bundled rule set by code
pub fn get_rules(code: &str) -> Result<&'static RuleData> {
    let embedded = EMBEDDED.get_or_init(load_embedded_rules);

    match embedded.get(code) {
        Some(Ok(rules)) => Ok(rules),
        Some(Err(e)) => Err(e.clone()),
        None => Err(MisspellError::Configuration(format!(
            "Unknown rule set code: {code}"
        ))),
    }
}

/// Codes of all bundled rule sets
pub fn list_rule_sets() -> Vec<&'static str> {
    let embedded = EMBEDDED.get_or_init(load_embedded_rules);
    let mut codes: Vec<&'static str> = embedded.keys().copied().collect();
    codes.sort_unstable();
    codes
}

impl RuleData {
    /// The bundled English rule set
    pub fn english() -> Result<&'static RuleData> {
        get_rules("en")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::tables::{CharClass, Position};

    #[test]
    fn test_english_rules_load() {
        let rules = RuleData::english().expect("English rules should exist");
        assert_eq!(rules.code(), "en");
        assert_eq!(rules.name(), "English");
        assert!(!rules.groups().is_empty());
        assert!(!rules.forbidden().is_empty());
        assert_eq!(rules.classes().class_of('e'), Some(CharClass::Vowel));
        assert_eq!(rules.classes().class_of('k'), Some(CharClass::Consonant));
        assert!(rules.groups().is_group('t', 'h'));
        assert!(rules.forbidden().violates(Position::Start, "ngo"));
    }

    #[test]
    fn test_unknown_rule_set() {
        match get_rules("nonexistent") {
            Err(MisspellError::Configuration(msg)) => assert!(msg.contains("nonexistent")),
            other => panic!("Expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_list_rule_sets() {
        assert_eq!(list_rule_sets(), vec!["en"]);
    }

    #[test]
    fn test_get_rules_multiple_times() {
        let first = get_rules("en").unwrap();
        let second = get_rules("en").unwrap();
        assert!(std::ptr::eq(first, second));
    }
}
