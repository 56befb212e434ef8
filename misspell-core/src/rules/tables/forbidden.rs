//! Position-indexed forbidden substrings

/// Position of an edited unit within its word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// First unit of the word
    Start,
    /// Neither first nor last
    Middle,
    /// Last unit of the word
    End,
}

/// Forbidden substring lists
#[derive(Debug, Clone, Default)]
pub struct ForbiddenTable {
    start: Vec<String>,
    middle: Vec<String>,
    end: Vec<String>,
}

impl ForbiddenTable {
    /// Create from validated lowercase lists
    pub fn new(start: Vec<String>, middle: Vec<String>, end: Vec<String>) -> Self {
        Self { start, middle, end }
    }

    /// Entries for one position
    pub fn entries(&self, position: Position) -> &[String] {
        match position {
            Position::Start => &self.start,
            Position::Middle => &self.middle,
            Position::End => &self.end,
        }
    }

    /// Check a lowercase window of text for a forbidden substring
    ///
    /// At `Start` the window begins at the word head, so entries must match
    /// as a prefix; at `End` the window ends at the word tail, so entries
    /// must match as a suffix; `Middle` entries match anywhere.
    pub fn violates(&self, position: Position, window: &str) -> bool {
        let entries = self.entries(position);
        match position {
            Position::Start => entries.iter().any(|f| window.starts_with(f.as_str())),
            Position::Middle => entries.iter().any(|f| window.contains(f.as_str())),
            Position::End => entries.iter().any(|f| window.ends_with(f.as_str())),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.middle.is_empty() && self.end.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ForbiddenTable {
        ForbiddenTable::new(
            vec!["ng".to_string()],
            vec!["qq".to_string()],
            vec!["j".to_string()],
        )
    }

    #[test]
    fn test_start_matches_prefix_only() {
        let table = table();
        assert!(table.violates(Position::Start, "nga"));
        assert!(!table.violates(Position::Start, "ang"));
    }

    #[test]
    fn test_middle_matches_anywhere() {
        let table = table();
        assert!(table.violates(Position::Middle, "aqqa"));
        assert!(table.violates(Position::Middle, "qq"));
        assert!(!table.violates(Position::Middle, "aqa"));
    }

    #[test]
    fn test_end_matches_suffix_only() {
        let table = table();
        assert!(table.violates(Position::End, "aj"));
        assert!(!table.violates(Position::End, "ja"));
    }

    #[test]
    fn test_empty_table_never_violates() {
        let table = ForbiddenTable::default();
        assert!(table.is_empty());
        assert!(!table.violates(Position::Middle, "anything"));
    }
}
