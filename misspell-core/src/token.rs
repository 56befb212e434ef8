//! Word/whitespace tokenization
//!
//! Text is split into alternating runs of non-whitespace ("words") and
//! whitespace. Concatenating the tokens in order reproduces the input.

/// A borrowed run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Run of non-whitespace characters
    Word(&'a str),
    /// Run of whitespace characters
    Whitespace(&'a str),
}

impl<'a> Token<'a> {
    /// Underlying text of the token
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Word(s) | Token::Whitespace(s) => s,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }
}

/// Split text into word and whitespace runs
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_whitespace = None;

    for (offset, ch) in text.char_indices() {
        let is_ws = ch.is_whitespace();
        match in_whitespace {
            Some(current) if current != is_ws => {
                tokens.push(make_token(&text[start..offset], current));
                start = offset;
            }
            _ => {}
        }
        in_whitespace = Some(is_ws);
    }

    if let Some(current) = in_whitespace {
        tokens.push(make_token(&text[start..], current));
    }

    tokens
}

fn make_token(run: &str, whitespace: bool) -> Token<'_> {
    if whitespace {
        Token::Whitespace(run)
    } else {
        Token::Word(run)
    }
}

/// Count characters both transformers leave untouched
///
/// Anything outside printable ASCII, other than ASCII whitespace, counts.
pub fn passthrough_count(text: &str) -> usize {
    text.chars()
        .filter(|&c| !is_printable_ascii(c) && !c.is_ascii_whitespace())
        .count()
}

/// Printable ASCII (space through tilde)
#[inline]
pub(crate) fn is_printable_ascii(ch: char) -> bool {
    matches!(ch, ' '..='~')
}
