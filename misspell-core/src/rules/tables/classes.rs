//! Vowel/consonant partition with O(1) lookup

/// Coarse pronunciation class of a letter or unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Vowel-like
    Vowel,
    /// Consonant-like
    Consonant,
}

/// Character class lookup table
#[derive(Debug, Clone)]
pub struct ClassTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [Option<CharClass>; 128],
    vowels: Vec<char>,
    consonants: Vec<char>,
}

impl ClassTable {
    /// Create from validated vowel and consonant letters
    pub fn new(vowels: &str, consonants: &str) -> Self {
        let mut ascii_table = [None; 128];

        for ch in vowels.chars().filter(char::is_ascii) {
            ascii_table[ch as usize] = Some(CharClass::Vowel);
        }
        for ch in consonants.chars().filter(char::is_ascii) {
            ascii_table[ch as usize] = Some(CharClass::Consonant);
        }

        Self {
            ascii_table,
            vowels: vowels.chars().collect(),
            consonants: consonants.chars().collect(),
        }
    }

    /// Class of a character, ignoring case
    #[inline]
    pub fn class_of(&self, ch: char) -> Option<CharClass> {
        if ch.is_ascii() {
            self.ascii_table[ch.to_ascii_lowercase() as usize]
        } else {
            None
        }
    }

    /// Letters belonging to a class
    pub fn members(&self, class: CharClass) -> &[char] {
        match class {
            CharClass::Vowel => &self.vowels,
            CharClass::Consonant => &self.consonants,
        }
    }
}
