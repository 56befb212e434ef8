//! Rule-constrained misspelling engine
//!
//! This crate turns correctly spelled text into plausibly misspelled text
//! using two independent transformers and a final word filter:
//!
//! - **Phonological**: splits each word into single letters and character
//!   groups ("th", "ee", ...) and deletes, inserts or replaces units with
//!   same-class units while respecting forbidden letter sequences
//! - **Typographical**: simulates keyboard slips over the whole text
//!   (dropped characters, adjacent-key insertions and substitutions, dropped
//!   spaces, transpositions)
//! - **Blacklist**: removes whole words after misspelling
//!
//! All randomness comes from an explicitly passed generator, so a seeded
//! generator reproduces the same output.
//!
//! # Example
//!
//! ```rust
//! use misspell_core::{Misspeller, Mode, ProbabilityConfig, TypoConfig};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let config = ProbabilityConfig::builder()
//!     .typo(TypoConfig {
//!         delete_char: 1.0,
//!         ..TypoConfig::disabled()
//!     })
//!     .build()
//!     .unwrap();
//!
//! let misspeller = Misspeller::builder().config(config).build().unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! assert_eq!(misspeller.misspell("hello", Mode::Typographical, &mut rng), "");
//! ```

pub mod blacklist;
pub mod config;
pub mod error;
pub mod keyboard;
pub mod phono;
mod random;
pub mod rules;
pub mod token;
pub mod transform;
pub mod typo;

pub use blacklist::{filter_text, Blacklist};
pub use config::{PhonoConfig, ProbabilityConfig, ProbabilityConfigBuilder, TypoConfig};
pub use error::{MisspellError, Result};
pub use keyboard::KeyboardAdjacency;
pub use phono::MAX_EDIT_ATTEMPTS;
pub use rules::{get_rules, list_rule_sets, CharClass, RuleData, RulesConfig};
pub use token::passthrough_count;
pub use transform::{transform, Misspeller, MisspellerBuilder, Mode};
