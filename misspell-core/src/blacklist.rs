//! Blacklist filtering
//!
//! Removes whole words, compared case-insensitively, after all misspelling
//! has finished. Whitespace around a removed word collapses into a single
//! separator so no doubled or dangling whitespace is left behind.

use crate::error::{MisspellError, Result};
use crate::token::{tokenize, Token};
use std::collections::HashSet;

/// Set of lowercase words removed from the final output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    words: HashSet<String>,
}

impl Blacklist {
    /// Empty blacklist
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from words; surrounding whitespace is trimmed
    ///
    /// An empty entry or one containing inner whitespace can never match a
    /// single word and is rejected.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() || word.chars().any(char::is_whitespace) {
                return Err(MisspellError::InvalidBlacklistEntry(word.to_string()));
            }
            set.insert(word.to_lowercase());
        }
        Ok(Self { words: set })
    }

    /// Whether a word is blacklisted, ignoring case
    pub fn contains(&self, word: &str) -> bool {
        !self.words.is_empty() && self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Blacklisted words in sorted order
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

/// Remove blacklisted words from text
///
/// Between two kept words the removed span becomes one whitespace run: the
/// first run containing a line break, otherwise the first run. At the start
/// of the text only whitespace preceding the removed words is kept, at the
/// end only whitespace following them. If every word is removed the result
/// is empty.
pub fn filter_text(text: &str, blacklist: &Blacklist) -> String {
    if blacklist.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut gap: Vec<Token<'_>> = Vec::new();
    let mut after_word = false;

    for token in tokenize(text) {
        match token {
            Token::Word(word) if !blacklist.contains(word) => {
                emit_gap(&mut out, &gap, after_word, true);
                gap.clear();
                out.push_str(word);
                after_word = true;
            }
            _ => gap.push(token),
        }
    }
    emit_gap(&mut out, &gap, after_word, false);

    out
}

/// Write the tokens found between kept words
fn emit_gap(out: &mut String, gap: &[Token<'_>], after_word: bool, before_word: bool) {
    if !gap.iter().any(Token::is_word) {
        gap.iter().for_each(|t| out.push_str(t.as_str()));
        return;
    }

    let kept = match (after_word, before_word) {
        (true, true) => {
            let mut runs = gap.iter().filter(|t| !t.is_word());
            let first = runs.clone().next();
            runs.find(|t| t.as_str().contains('\n')).or(first)
        }
        (false, true) => gap.first().filter(|t| !t.is_word()),
        (true, false) => gap.last().filter(|t| !t.is_word()),
        (false, false) => None,
    };

    if let Some(token) = kept {
        out.push_str(token.as_str());
    }
}
