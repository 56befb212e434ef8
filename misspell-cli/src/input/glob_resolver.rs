//! File pattern resolution using glob

use super::InputSource;
use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::collections::HashSet;

/// Resolve file patterns to input sources
///
/// Sources keep the order of the patterns; files matched by one pattern are
/// sorted. `-` stands for standard input. A source matched more than once is
/// kept at its first position.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut sources = Vec::new();
    let mut seen = HashSet::new();

    for pattern in patterns {
        if pattern == "-" {
            if seen.insert(InputSource::Stdin) {
                sources.push(InputSource::Stdin);
            }
            continue;
        }

        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        let mut matched = Vec::new();
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                matched.push(path);
            }
        }

        if matched.is_empty() && !has_wildcard(pattern) {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }

        matched.sort();
        for path in matched {
            let source = InputSource::File(path);
            if seen.insert(source.clone()) {
                sources.push(source);
            }
        }
    }

    if sources.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    Ok(sources)
}

fn has_wildcard(pattern: &str) -> bool {
    pattern.contains(&['*', '?', '['][..])
}
