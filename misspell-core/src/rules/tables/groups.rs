//! Character group membership

use std::collections::HashSet;

/// Known two-character groups, stored lowercase
#[derive(Debug, Clone, Default)]
pub struct GroupTable {
    pairs: HashSet<(char, char)>,
    ordered: Vec<(char, char)>,
}

impl GroupTable {
    /// Create from validated two-character strings
    pub fn new(pairs: &[String]) -> Self {
        let mut table = Self::default();

        for pair in pairs {
            let mut chars = pair.chars();
            if let (Some(first), Some(second)) = (chars.next(), chars.next()) {
                let key = (first, second);
                if table.pairs.insert(key) {
                    table.ordered.push(key);
                }
            }
        }

        table
    }

    /// Whether two adjacent characters form a group, ignoring case
    #[inline]
    pub fn is_group(&self, first: char, second: char) -> bool {
        !self.pairs.is_empty()
            && self
                .pairs
                .contains(&(first.to_ascii_lowercase(), second.to_ascii_lowercase()))
    }

    /// Groups in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.ordered.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
