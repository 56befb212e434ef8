//! Word segmentation into pronunciation-like units

use crate::random::roll;
use crate::rules::{RuleData, UnitChars};
use rand::Rng;
use smallvec::smallvec;

/// Split a word into one- and two-character units
///
/// Each adjacent pair that forms a known character group is kept together
/// with probability `group_probability`. Every character of the word lands in
/// exactly one unit, in order.
pub fn segment<R: Rng + ?Sized>(
    word: &str,
    rules: &RuleData,
    group_probability: f64,
    rng: &mut R,
) -> Vec<UnitChars> {
    let chars: Vec<char> = word.chars().collect();
    let mut units = Vec::with_capacity(chars.len());

    let mut i = 0;
    while i < chars.len() {
        let grouped = i + 1 < chars.len()
            && rules.groups().is_group(chars[i], chars[i + 1])
            && roll(rng, group_probability);

        if grouped {
            units.push(smallvec![chars[i], chars[i + 1]]);
            i += 2;
        } else {
            units.push(smallvec![chars[i]]);
            i += 1;
        }
    }

    units
}
