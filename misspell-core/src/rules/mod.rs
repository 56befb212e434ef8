//! Phonological rule data
//!
//! Rule sets are described in TOML (class partition, character groups and
//! forbidden substrings by position), validated once, and compiled into
//! read-only lookup tables.

pub mod config;
pub mod loader;
pub mod runtime;
pub mod tables;

pub use config::RulesConfig;
pub use loader::{get_rules, list_rule_sets};
pub use runtime::{RuleData, UnitChars};
pub use tables::{CharClass, Position};
