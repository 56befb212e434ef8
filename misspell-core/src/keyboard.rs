//! Keyboard adjacency for typographical errors
//!
//! A layout is a set of layers (unshifted, shifted), each a list of rows whose
//! columns are aligned. Two keys are adjacent when they share a layer and
//! differ by at most one row and one column, diagonals included.

use crate::random::choose;
use rand::Rng;
use smallvec::SmallVec;
use std::collections::HashMap;

/// Neighbors of a single key (at most eight)
pub type Neighbors = SmallVec<[char; 8]>;

/// Unshifted QWERTY rows, aligned by column
pub const QWERTY_LOWER: [&str; 4] = ["1234567890-=", "qwertyuiop[]", "asdfghjkl;'", "zxcvbnm,./"];

/// Shifted QWERTY rows, aligned by column
pub const QWERTY_UPPER: [&str; 4] = ["!@#$%^&*()_+", "QWERTYUIOP{}", "ASDFGHJKL:\"", "ZXCVBNM<>?"];

/// Character to nearby-character mapping
#[derive(Debug, Clone)]
pub struct KeyboardAdjacency {
    /// ASCII lookup table for chars 0-127
    ascii_table: Vec<Neighbors>,
    /// Keys outside ASCII (custom layouts only)
    non_ascii: HashMap<char, Neighbors>,
}

impl Default for KeyboardAdjacency {
    fn default() -> Self {
        Self::qwerty()
    }
}

impl KeyboardAdjacency {
    /// Standard US QWERTY layout
    pub fn qwerty() -> Self {
        Self::from_layers(&[&QWERTY_LOWER, &QWERTY_UPPER])
    }

    /// Build adjacency from layers of column-aligned rows
    pub fn from_layers(layers: &[&[&str]]) -> Self {
        let mut table = Self {
            ascii_table: vec![Neighbors::new(); 128],
            non_ascii: HashMap::new(),
        };

        for layer in layers {
            let grid: Vec<Vec<char>> = layer.iter().map(|row| row.chars().collect()).collect();

            for (r, row) in grid.iter().enumerate() {
                for (c, &key) in row.iter().enumerate() {
                    for neighbor in grid_neighbors(&grid, r, c) {
                        table.add(key, neighbor);
                    }
                }
            }
        }

        table
    }

    fn add(&mut self, key: char, neighbor: char) {
        if key == neighbor {
            return;
        }
        let entry = if key.is_ascii() {
            &mut self.ascii_table[key as usize]
        } else {
            self.non_ascii.entry(key).or_default()
        };
        if !entry.contains(&neighbor) {
            entry.push(neighbor);
        }
    }

    /// Keys adjacent to `ch`; empty if `ch` is not on the layout
    #[inline]
    pub fn neighbors(&self, ch: char) -> &[char] {
        if ch.is_ascii() {
            &self.ascii_table[ch as usize]
        } else {
            self.non_ascii.get(&ch).map(|n| n.as_slice()).unwrap_or(&[])
        }
    }

    /// Draw a nearby key uniformly, matching the case of `ch`
    pub fn mistype<R: Rng + ?Sized>(&self, ch: char, rng: &mut R) -> Option<char> {
        let neighbor = *choose(rng, self.neighbors(ch))?;
        Some(match_case(ch, neighbor))
    }
}

fn grid_neighbors(grid: &[Vec<char>], r: usize, c: usize) -> impl Iterator<Item = char> + '_ {
    (-1isize..=1)
        .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
        .filter(|&offset| offset != (0, 0))
        .filter_map(move |(dr, dc)| {
            let row = grid.get(r.checked_add_signed(dr)?)?;
            row.get(c.checked_add_signed(dc)?).copied()
        })
}

fn match_case(original: char, replacement: char) -> char {
    if original.is_ascii_uppercase() {
        replacement.to_ascii_uppercase()
    } else if original.is_ascii_lowercase() {
        replacement.to_ascii_lowercase()
    } else {
        replacement
    }
}
