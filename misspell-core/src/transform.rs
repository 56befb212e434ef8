//! Pipeline orchestration
//!
//! Sequences the phonological pass, the typographical pass and the
//! blacklist filter according to the requested [`Mode`].

use crate::blacklist::{filter_text, Blacklist};
use crate::config::ProbabilityConfig;
use crate::error::{MisspellError, Result};
use crate::keyboard::KeyboardAdjacency;
use crate::phono::transform_word;
use crate::rules::RuleData;
use crate::token::{tokenize, Token};
use crate::typo::transform_text;
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Which misspelling passes run before the blacklist filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Phonological per word, then typographical over the whole text
    #[default]
    All,
    /// Phonological only
    Phonological,
    /// Typographical only
    Typographical,
}

impl Mode {
    /// All modes in selector order
    pub const ALL: [Mode; 3] = [Mode::All, Mode::Phonological, Mode::Typographical];

    /// Numeric selector (0, 1, 2)
    pub fn index(&self) -> u8 {
        match self {
            Mode::All => 0,
            Mode::Phonological => 1,
            Mode::Typographical => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::All => "all",
            Mode::Phonological => "phono",
            Mode::Typographical => "typo",
        }
    }

    /// Whether the phonological pass runs
    pub fn phonological(&self) -> bool {
        matches!(self, Mode::All | Mode::Phonological)
    }

    /// Whether the typographical pass runs
    pub fn typographical(&self) -> bool {
        matches!(self, Mode::All | Mode::Typographical)
    }
}

impl TryFrom<u8> for Mode {
    type Error = MisspellError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Mode::All),
            1 => Ok(Mode::Phonological),
            2 => Ok(Mode::Typographical),
            other => Err(MisspellError::UnknownMode(other.to_string())),
        }
    }
}

impl FromStr for Mode {
    type Err = MisspellError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "all" => Ok(Mode::All),
            "1" | "phono" | "phonological" => Ok(Mode::Phonological),
            "2" | "typo" | "typographical" => Ok(Mode::Typographical),
            _ => Err(MisspellError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Misspell text with explicit configuration and random source
///
/// The configuration is validated before any work is done; on error no
/// output is produced. Rule data and blacklists are validated when built.
pub fn transform<R: Rng + ?Sized>(
    text: &str,
    mode: Mode,
    config: &ProbabilityConfig,
    rules: &RuleData,
    blacklist: &Blacklist,
    rng: &mut R,
) -> Result<String> {
    config.validate()?;
    Ok(run_pipeline(
        text,
        mode,
        config,
        rules,
        &KeyboardAdjacency::qwerty(),
        blacklist,
        rng,
    ))
}

fn run_pipeline<R: Rng + ?Sized>(
    text: &str,
    mode: Mode,
    config: &ProbabilityConfig,
    rules: &RuleData,
    keyboard: &KeyboardAdjacency,
    blacklist: &Blacklist,
    rng: &mut R,
) -> String {
    let mut current = if mode.phonological() {
        tokenize(text)
            .into_iter()
            .map(|token| match token {
                Token::Word(word) => transform_word(word, &config.phono, rules, rng),
                Token::Whitespace(ws) => ws.to_string(),
            })
            .collect()
    } else {
        text.to_string()
    };

    if mode.typographical() {
        current = transform_text(&current, &config.typo, keyboard, rng);
    }

    filter_text(&current, blacklist)
}

/// Reusable misspeller holding validated configuration
///
/// Cheap to clone and safe to share across threads; each call supplies its
/// own random source.
#[derive(Debug, Clone)]
pub struct Misspeller {
    config: ProbabilityConfig,
    rules: Arc<RuleData>,
    keyboard: Arc<KeyboardAdjacency>,
    blacklist: Arc<Blacklist>,
}

impl Misspeller {
    /// Create a builder
    pub fn builder() -> MisspellerBuilder {
        MisspellerBuilder::default()
    }

    /// Misspeller with default probabilities, English rules and no blacklist
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn config(&self) -> &ProbabilityConfig {
        &self.config
    }

    pub fn rules(&self) -> &RuleData {
        &self.rules
    }

    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }

    /// Misspell text
    pub fn misspell<R: Rng + ?Sized>(&self, text: &str, mode: Mode, rng: &mut R) -> String {
        run_pipeline(
            text,
            mode,
            &self.config,
            &self.rules,
            &self.keyboard,
            &self.blacklist,
            rng,
        )
    }

    /// Misspell independent texts in parallel
    ///
    /// Text `k` uses a generator seeded with `seed + k`, so results do not
    /// depend on thread scheduling.
    #[cfg(feature = "parallel")]
    pub fn misspell_batch<S>(&self, texts: &[S], mode: Mode, seed: u64) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        use rand::rngs::StdRng;
        use rand::SeedableRng;
        use rayon::prelude::*;

        texts
            .par_iter()
            .enumerate()
            .map(|(k, text)| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(k as u64));
                self.misspell(text.as_ref(), mode, &mut rng)
            })
            .collect()
    }
}

/// Fluent builder for [`Misspeller`]
#[derive(Debug, Default)]
pub struct MisspellerBuilder {
    config: Option<ProbabilityConfig>,
    rules: Option<Arc<RuleData>>,
    keyboard: Option<KeyboardAdjacency>,
    blacklist: Option<Blacklist>,
}

impl MisspellerBuilder {
    /// Set the probability configuration
    pub fn config(mut self, config: ProbabilityConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the phonological rule data
    pub fn rules(mut self, rules: impl Into<Arc<RuleData>>) -> Self {
        self.rules = Some(rules.into());
        self
    }

    /// Set a custom keyboard layout
    pub fn keyboard(mut self, keyboard: KeyboardAdjacency) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    /// Set the blacklist
    pub fn blacklist(mut self, blacklist: Blacklist) -> Self {
        self.blacklist = Some(blacklist);
        self
    }

    /// Validate and build
    pub fn build(self) -> Result<Misspeller> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let rules = match self.rules {
            Some(rules) => rules,
            None => Arc::new(RuleData::english()?.clone()),
        };

        Ok(Misspeller {
            config,
            rules,
            keyboard: Arc::new(self.keyboard.unwrap_or_default()),
            blacklist: Arc::new(self.blacklist.unwrap_or_default()),
        })
    }
}
