// Name occurrence tallies supplied by the document model

use std::collections::HashMap;

/// Multiset of declared names: each distinct name mapped to how many times it
/// was declared in a document.
///
/// Built fresh per validation pass by the document-model collaborator (e.g.
/// "all resource names currently declared"); the parsing layer only reads it.
/// Insertion order is irrelevant, duplicates are counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameCounts {
    counts: HashMap<String, usize>,
}

impl NameCounts {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one declaration of `name`
    pub fn add(&mut self, name: impl Into<String>) {
        *self.counts.entry(name.into()).or_insert(0) += 1;
    }

    /// Number of times `name` was declared
    pub fn count(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Number of distinct names
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no names were declared
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(name, occurrence count)` pairs, unordered
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
    }
}

impl<S: Into<String>> FromIterator<S> for NameCounts {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counts = NameCounts::new();
        counts.extend(iter);
        counts
    }
}

impl<S: Into<String>> Extend<S> for NameCounts {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.add(name);
        }
    }
}
