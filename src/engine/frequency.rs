//! Term-frequency table over the token stream.

use std::collections::HashMap;

/// Fixed stopword set excluded from frequency counting.
///
/// This short list is a deliberate policy constant, not a general-purpose
/// stopword dictionary; changing it changes observable output.
pub const STOPWORDS: [&str; 21] = [
    "the", "and", "for", "with", "that", "this", "have", "from", "were", "which", "when", "what",
    "where", "are", "but", "not", "you", "your", "all", "their", "they",
];

/// Number of ranked terms used for sentence scoring.
pub const TOP_TERM_COUNT: usize = 20;

#[derive(Clone, Debug)]
struct TermEntry {
    count: u64,
    first_seen: usize,
}

/// Occurrence counts per non-stopword token, with first-seen positions for
/// deterministic tie-breaking.
#[derive(Clone, Debug, Default)]
pub struct TermFrequencyTable {
    entries: HashMap<String, TermEntry>,
}

impl TermFrequencyTable {
    /// Count token occurrences, skipping stopwords.
    #[must_use]
    pub fn build(tokens: &[String]) -> Self {
        let mut entries: HashMap<String, TermEntry> = HashMap::new();
        for (position, token) in tokens.iter().enumerate() {
            if STOPWORDS.contains(&token.as_str()) {
                continue;
            }
            entries
                .entry(token.clone())
                .and_modify(|e| e.count += 1)
                .or_insert(TermEntry {
                    count: 1,
                    first_seen: position,
                });
        }
        Self { entries }
    }

    /// Occurrence count for a term, zero when absent.
    #[must_use]
    pub fn count(&self, term: &str) -> u64 {
        self.entries.get(term).map_or(0, |e| e.count)
    }

    /// Number of distinct terms in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` highest-count terms, descending; equal counts keep the order
    /// in which the terms first appeared in the token stream.
    #[must_use]
    pub fn top_terms(&self, n: usize) -> Vec<String> {
        let mut ranked: Vec<(&String, &TermEntry)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        ranked.into_iter().take(n).map(|(t, _)| t.clone()).collect()
    }
}
