//! Error types for the misspelling engine
//!
//! Every error is raised while validating inputs, before any text is
//! transformed. Random outcomes never produce an error.

use thiserror::Error;

/// Validation errors for configuration, rule data and blacklists
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MisspellError {
    /// A probability lies outside [0.0, 1.0] or is not a number
    #[error("invalid probability {section}.{key} = {value}: must be within [0.0, 1.0]")]
    ProbabilityOutOfRange {
        /// Settings section (`typo` or `phono`)
        section: &'static str,
        /// Key within the section
        key: &'static str,
        /// The rejected value
        value: f64,
    },

    /// The mutually exclusive delete/insert/replace events sum above 1.0
    #[error("probabilities of mutually exclusive events in [{section}] sum to {sum}, which exceeds 1.0")]
    ExclusiveSumExceeded {
        /// Settings section (`typo` or `phono`)
        section: &'static str,
        /// The offending sum
        sum: f64,
    },

    /// Malformed character groups, forbidden substrings or class partition
    #[error("Invalid rule data: {0}")]
    InvalidRules(String),

    /// Configuration loading or parsing error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Blacklist entry that can never match a whole word
    #[error("Invalid blacklist entry: {0:?}")]
    InvalidBlacklistEntry(String),

    /// Unrecognized mode selector
    #[error("Unknown mode: {0}")]
    UnknownMode(String),
}

/// Result type for misspelling operations
pub type Result<T> = std::result::Result<T, MisspellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_error_display() {
        let error = MisspellError::ProbabilityOutOfRange {
            section: "typo",
            key: "swap",
            value: 1.5,
        };
        assert_eq!(
            error.to_string(),
            "invalid probability typo.swap = 1.5: must be within [0.0, 1.0]"
        );
    }

    #[test]
    fn test_sum_error_display() {
        let error = MisspellError::ExclusiveSumExceeded {
            section: "phono",
            sum: 1.25,
        };
        assert!(error.to_string().contains("[phono]"));
        assert!(error.to_string().contains("1.25"));
    }

    #[test]
    fn test_string_variants_display() {
        assert_eq!(
            MisspellError::InvalidRules("empty vowel set".into()).to_string(),
            "Invalid rule data: empty vowel set"
        );
        assert_eq!(
            MisspellError::InvalidBlacklistEntry("two words".into()).to_string(),
            "Invalid blacklist entry: \"two words\""
        );
        assert_eq!(
            MisspellError::UnknownMode("7".into()).to_string(),
            "Unknown mode: 7"
        );
    }
}
