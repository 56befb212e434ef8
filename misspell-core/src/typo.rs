//! Typographical misspelling
//!
//! Simulates careless typing: characters are dropped, doubled with a nearby
//! key, or mistyped as a nearby key, and finally adjacent characters are
//! transposed.

use crate::config::TypoConfig;
use crate::keyboard::KeyboardAdjacency;
use crate::random::{pick_exclusive, roll, Side};
use crate::token::is_printable_ascii;
use rand::Rng;

const DELETE_CHAR: usize = 0;
const INSERT: usize = 1;
const REPLACE: usize = 2;

/// Misspell a whole text
///
/// Only printable ASCII is edited. Spaces may be deleted; tabs, line breaks
/// and anything outside ASCII are copied through and never swapped.
pub fn transform_text<R: Rng + ?Sized>(
    text: &str,
    config: &TypoConfig,
    keyboard: &KeyboardAdjacency,
    rng: &mut R,
) -> String {
    let mistyped = mistype_chars(text, config, keyboard, rng);
    swap_adjacent(&mistyped, config.swap, rng)
}

/// Character-local pass over the original text
pub fn mistype_chars<R: Rng + ?Sized>(
    text: &str,
    config: &TypoConfig,
    keyboard: &KeyboardAdjacency,
    rng: &mut R,
) -> String {
    let exclusive = config.exclusive();
    let mut out = String::with_capacity(text.len());

    for ch in text.chars() {
        if !is_printable_ascii(ch) {
            out.push(ch);
            continue;
        }

        if ch == ' ' {
            if !roll(rng, config.delete_space) {
                out.push(ch);
            }
            continue;
        }

        match pick_exclusive(rng, &exclusive) {
            Some(DELETE_CHAR) => {}
            Some(INSERT) => {
                let side = Side::draw(rng);
                match (keyboard.mistype(ch, rng), side) {
                    (Some(extra), Side::Before) => {
                        out.push(extra);
                        out.push(ch);
                    }
                    (Some(extra), Side::After) => {
                        out.push(ch);
                        out.push(extra);
                    }
                    (None, _) => out.push(ch),
                }
            }
            Some(REPLACE) => out.push(keyboard.mistype(ch, rng).unwrap_or(ch)),
            _ => out.push(ch),
        }
    }

    out
}

/// Single left-to-right transposition pass
///
/// Only pairs of the same kind are eligible (see [`can_swap`]). A swapped
/// pair is consumed: scanning resumes after the second character, so no
/// character moves twice.
pub fn swap_adjacent<R: Rng + ?Sized>(text: &str, probability: f64, rng: &mut R) -> String {
    let mut chars: Vec<char> = text.chars().collect();

    let mut i = 0;
    while i + 1 < chars.len() {
        if can_swap(chars[i], chars[i + 1]) && roll(rng, probability) {
            chars.swap(i, i + 1);
            i += 2;
        } else {
            i += 1;
        }
    }

    chars.into_iter().collect()
}

/// Whether two adjacent characters may trade places
///
/// Two lowercase letters, two uppercase letters, two digits or two
/// punctuation marks. Whitespace never moves, so words are not joined or
/// split.
pub fn can_swap(a: char, b: char) -> bool {
    (a.is_ascii_lowercase() && b.is_ascii_lowercase())
        || (a.is_ascii_uppercase() && b.is_ascii_uppercase())
        || (a.is_ascii_digit() && b.is_ascii_digit())
        || (a.is_ascii_punctuation() && b.is_ascii_punctuation())
}
