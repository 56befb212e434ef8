//! Phonological misspelling
//!
//! A word is segmented into units (single letters or character groups), then
//! each unit may be deleted, have a same-class unit inserted beside it, or be
//! replaced by a same-class unit. Inserts and replacements are checked
//! against the forbidden substrings for the edited position and retried a
//! bounded number of times before the unit is left alone.

pub mod segment;

pub use segment::segment;

use crate::config::PhonoConfig;
use crate::random::{choose, pick_exclusive, Side};
use crate::rules::{CharClass, Position, RuleData, UnitChars};
use rand::Rng;

/// Candidates tried per insert or replace before giving up on the unit
pub const MAX_EDIT_ATTEMPTS: usize = 3;

const DELETE: usize = 0;
const INSERT: usize = 1;
const REPLACE: usize = 2;

/// Misspell a single word
///
/// Never returns an empty string for a non-empty word: the last remaining
/// unit is never deleted. Units containing characters outside the class
/// partition (digits, punctuation, non-ASCII) are kept as they are.
pub fn transform_word<R: Rng + ?Sized>(
    word: &str,
    config: &PhonoConfig,
    rules: &RuleData,
    rng: &mut R,
) -> String {
    if word.is_empty() {
        return String::new();
    }

    let mut units = segment(word, rules, config.group, rng);
    let uppercase_word = is_uppercase_word(word);
    let exclusive = config.exclusive();

    let mut i = 0;
    while i < units.len() {
        let Some(class) = rules.unit_class(&units[i]) else {
            i += 1;
            continue;
        };

        match pick_exclusive(rng, &exclusive) {
            Some(DELETE) if units.len() > 1 => {
                units.remove(i);
            }
            Some(INSERT) => {
                i += insert(&mut units, i, class, uppercase_word, rules, rng);
            }
            Some(REPLACE) => {
                replace(&mut units, i, class, rules, rng);
                i += 1;
            }
            _ => i += 1,
        }
    }

    units.iter().flatten().collect()
}

/// Insert a unit beside `units[i]`; returns how far to advance past `i`
fn insert<R: Rng + ?Sized>(
    units: &mut Vec<UnitChars>,
    i: usize,
    class: CharClass,
    uppercase: bool,
    rules: &RuleData,
    rng: &mut R,
) -> usize {
    let at = match Side::draw(rng) {
        Side::Before => i,
        Side::After => i + 1,
    };

    for _ in 0..MAX_EDIT_ATTEMPTS {
        let Some(candidate) = choose(rng, rules.candidates(class)) else {
            break;
        };

        let unit: UnitChars = candidate
            .iter()
            .map(|&c| {
                if uppercase {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect();

        units.insert(at, unit);
        if admissible(units, at, rules) {
            return 2;
        }
        units.remove(at);
    }

    1
}

/// Replace `units[i]` with a different unit of the same class
fn replace<R: Rng + ?Sized>(
    units: &mut [UnitChars],
    i: usize,
    class: CharClass,
    rules: &RuleData,
    rng: &mut R,
) {
    let original = units[i].clone();
    let lowered: UnitChars = original.iter().map(|c| c.to_ascii_lowercase()).collect();
    let distinct: Vec<&UnitChars> = rules
        .candidates(class)
        .iter()
        .filter(|candidate| **candidate != lowered)
        .collect();

    for _ in 0..MAX_EDIT_ATTEMPTS {
        let Some(candidate) = choose(rng, &distinct) else {
            break;
        };

        units[i] = copy_case(&original, candidate);
        if admissible(units, i, rules) {
            return;
        }
    }

    units[i] = original;
}

/// Check the window around `units[at]` against the forbidden substrings
///
/// Units outside the class partition (punctuation, digits) break a word into
/// letter blocks. The window spans the edited unit and its immediate
/// neighbors within the same block. The position category follows the
/// edited unit: the head of a block is checked as a start, the tail as an
/// end (a lone unit is both), anything else as middle.
fn admissible(units: &[UnitChars], at: usize, rules: &RuleData) -> bool {
    let is_letter = |k: usize| rules.unit_class(&units[k]).is_some();
    let at_start = at == 0 || !is_letter(at - 1);
    let at_end = at + 1 == units.len() || !is_letter(at + 1);

    let first = if at_start { at } else { at - 1 };
    let last = if at_end { at } else { at + 1 };
    let window: String = units[first..=last]
        .iter()
        .flatten()
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let forbidden = rules.forbidden();

    if at_start && forbidden.violates(Position::Start, &window) {
        return false;
    }
    if at_end && forbidden.violates(Position::End, &window) {
        return false;
    }
    if !at_start && !at_end && forbidden.violates(Position::Middle, &window) {
        return false;
    }
    true
}

/// Apply the case pattern of `original` to a lowercase candidate
fn copy_case(original: &[char], candidate: &[char]) -> UnitChars {
    candidate
        .iter()
        .enumerate()
        .map(|(k, &c)| {
            let reference = original.get(k).or(original.last());
            match reference {
                Some(r) if r.is_ascii_uppercase() => c.to_ascii_uppercase(),
                _ => c,
            }
        })
        .collect()
}

/// Whole word written in capitals (at least two letters, none lowercase)
fn is_uppercase_word(word: &str) -> bool {
    let letters = word.chars().filter(|c| c.is_ascii_alphabetic()).count();
    letters >= 2 && !word.chars().any(|c| c.is_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use smallvec::smallvec;

    fn rules(extra: &str) -> RuleData {
        RuleData::from_toml_str(&format!(
            r#"
            [metadata]
            code = "t"
            name = "T"

            [classes]
            vowels = "aeiou"
            consonants = "bcdfghjklmnpqrstvwxyz"

            {extra}
        "#
        ))
        .unwrap()
    }

    fn phono(delete: f64, insert: f64, replace: f64, group: f64) -> PhonoConfig {
        PhonoConfig {
            delete,
            insert,
            replace,
            group,
        }
    }

    #[test]
    fn test_all_zero_is_identity() {
        let rules = rules("");
        let mut rng = StdRng::seed_from_u64(1);
        let config = PhonoConfig::disabled();
        for word in ["hello", "World", "x", "don't", "naïve"] {
            assert_eq!(transform_word(word, &config, &rules, &mut rng), word);
        }
    }

    #[test]
    fn test_sole_group_unit_never_deleted() {
        let rules = rules("[groups]\npairs = [\"ab\"]\n");
        let config = phono(1.0, 0.0, 0.0, 1.0);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(transform_word("ab", &config, &rules, &mut rng), "ab");
        }
    }

    #[test]
    fn test_delete_keeps_last_unit() {
        let rules = rules("");
        let config = phono(1.0, 0.0, 0.0, 0.0);
        let mut rng = StdRng::seed_from_u64(9);
        // Every unit but the final survivor is removed
        assert_eq!(transform_word("cat", &config, &rules, &mut rng), "t");
        assert_eq!(transform_word("a", &config, &rules, &mut rng), "a");
    }

    #[test]
    fn test_punctuation_units_untouched() {
        let rules = rules("");
        let config = phono(1.0, 0.0, 0.0, 0.0);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(transform_word("a-b!", &config, &rules, &mut rng), "-!");
        assert_eq!(transform_word("42", &config, &rules, &mut rng), "42");
    }

    #[test]
    fn test_replace_keeps_class() {
        let rules = rules("");
        let config = phono(0.0, 0.0, 1.0, 0.0);
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = transform_word("bab", &config, &rules, &mut rng);
            let chars: Vec<char> = out.chars().collect();
            assert_eq!(chars.len(), 3);
            assert!("aeiou".contains(chars[1]), "vowel replaced by {out}");
            assert_ne!(chars[1], 'a');
            assert!(!"aeiou".contains(chars[0]));
            assert_ne!(chars[0], 'b');
            assert!(!"aeiou".contains(chars[2]));
        }
    }

    #[test]
    fn test_replace_preserves_case() {
        let rules = rules("");
        let config = phono(0.0, 0.0, 1.0, 0.0);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = transform_word("Ba", &config, &rules, &mut rng);
            let mut chars = out.chars();
            assert!(chars.next().unwrap().is_ascii_uppercase());
            assert!(chars.next().unwrap().is_ascii_lowercase());
        }
    }

    #[test]
    fn test_insert_grows_word_with_same_class() {
        let rules = rules("");
        let config = phono(0.0, 1.0, 0.0, 0.0);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = transform_word("o", &config, &rules, &mut rng);
            assert_eq!(out.chars().count(), 2);
            assert!(out.chars().all(|c| "aeiou".contains(c)), "got {out}");
        }
    }

    #[test]
    fn test_insert_in_uppercase_word() {
        let rules = rules("");
        let config = phono(0.0, 1.0, 0.0, 0.0);
        let mut rng = StdRng::seed_from_u64(12);
        let out = transform_word("OK", &config, &rules, &mut rng);
        assert_eq!(out.chars().count(), 4);
        assert!(out.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_fail_open_when_every_candidate_is_forbidden() {
        // Every vowel pair and every vowel ending is forbidden
        let rules = rules(
            r#"
            [forbidden]
            start = ["a", "e", "i", "o", "u"]
            end = ["a", "e", "i", "o", "u"]
        "#,
        );
        let config = phono(0.0, 0.5, 0.5, 0.0);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(transform_word("a", &config, &rules, &mut rng), "a");
        }
    }

    #[test]
    fn test_admissible_positions() {
        let rules = rules(
            r#"
            [forbidden]
            start = ["x"]
            middle = ["zz"]
            end = ["q"]
        "#,
        );
        let units: Vec<UnitChars> = vec![smallvec!['x'], smallvec!['z'], smallvec!['z'], smallvec!['q']];

        assert!(!admissible(&units, 0, &rules));
        assert!(!admissible(&units, 1, &rules));
        assert!(!admissible(&units, 2, &rules));
        assert!(!admissible(&units, 3, &rules));

        let clean: Vec<UnitChars> = vec![smallvec!['a'], smallvec!['x'], smallvec!['b']];
        // 'x' is only forbidden at the start
        assert!(admissible(&clean, 1, &rules));
    }

    #[test]
    fn test_punctuation_bounds_letter_blocks() {
        let rules = RuleData::from_toml_str(
            r#"
            [metadata]
            code = "t"
            name = "T"

            [classes]
            vowels = "a"
            consonants = "tj"

            [forbidden]
            start = ["j"]
            end = ["j"]
        "#,
        )
        .unwrap();
        let config = phono(0.0, 0.0, 1.0, 0.0);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(transform_word("at", &config, &rules, &mut rng), "at");
            assert_eq!(transform_word("at.", &config, &rules, &mut rng), "at.");
            assert_eq!(transform_word("\"ta", &config, &rules, &mut rng), "\"ta");
            assert_eq!(transform_word("ta-at", &config, &rules, &mut rng), "ta-at");
        }
    }

    #[test]
    fn test_admissible_window_stops_at_punctuation() {
        let rules = rules(
            r#"
            [forbidden]
            end = ["b"]
        "#,
        );
        let units: Vec<UnitChars> = vec![smallvec!['a'], smallvec!['b'], smallvec!['.'], smallvec!['c']];

        // 'b' ends its block, so the end list applies
        assert!(!admissible(&units, 1, &rules));
        // 'c' starts and ends its own block
        assert!(admissible(&units, 3, &rules));
    }

    #[test]
    fn test_deterministic_for_seed() {
        let rules = rules("[groups]\npairs = [\"th\", \"ea\"]\n");
        let config = phono(0.2, 0.2, 0.2, 0.5);
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            transform_word("weathering", &config, &rules, &mut rng)
        };
        assert_eq!(run(77), run(77));
    }

    #[test]
    fn test_copy_case() {
        assert_eq!(copy_case(&['T', 'h'], &['s', 'h']).as_slice(), &['S', 'h']);
        assert_eq!(copy_case(&['A'], &['e', 'a']).as_slice(), &['E', 'A']);
        assert_eq!(copy_case(&['a'], &['o']).as_slice(), &['o']);
    }

    #[test]
    fn test_uppercase_word_detection() {
        assert!(is_uppercase_word("NASA"));
        assert!(is_uppercase_word("OK!"));
        assert!(!is_uppercase_word("I"));
        assert!(!is_uppercase_word("Hello"));
    }
}
