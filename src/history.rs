//! In-memory command history
//!
//! Ordered record of previously submitted input lines, most-recent-last.
//! Entries are not deduplicated and nothing is persisted: a history lives
//! and dies with its session. Provides fuzzy and regex search over the
//! recorded entries.

use std::collections::VecDeque;

use crate::error::Result;

/// Default maximum number of history entries to keep
pub const DEFAULT_MAX_ENTRIES: usize = 10_000;

/// Session-scoped command history
#[derive(Debug, Clone)]
pub struct History {
    /// Recorded entries, oldest first
    entries: VecDeque<String>,
    /// Maximum history size
    max_entries: usize,
}

impl History {
    /// Create a history with the default cap
    pub fn new() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }

    /// Create a history with a custom cap
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries,
        }
    }

    /// Record a submitted line. Duplicates are kept; only the oldest
    /// entries are evicted once the cap is exceeded.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push_back(entry.into());
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    /// All entries in submission order
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.as_str())
    }

    /// The most recently recorded entry
    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(|s| s.as_str())
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries are recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Search history with fuzzy matching, best matches first.
    /// An empty query returns everything, most recent first.
    pub fn search(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return self.entries.iter().rev().cloned().collect();
        }

        let query_lower = query.to_lowercase();

        let mut results: Vec<(usize, String)> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let score = fuzzy_score(&query_lower, &entry.to_lowercase());
                if score > 0 {
                    Some((score, entry.clone()))
                } else {
                    None
                }
            })
            .collect();

        results.sort_by(|a, b| b.0.cmp(&a.0));

        // Remove duplicates while preserving order
        let mut seen = std::collections::HashSet::new();
        results
            .into_iter()
            .filter_map(|(_, entry)| seen.insert(entry.clone()).then_some(entry))
            .collect()
    }

    /// Search history with a regex, most recent first
    pub fn search_regex(&self, pattern: &str) -> Result<Vec<String>> {
        let re = regex::Regex::new(pattern)?;

        let mut results: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| re.is_match(entry))
            .cloned()
            .collect();
        results.reverse();

        let mut seen = std::collections::HashSet::new();
        Ok(results
            .into_iter()
            .filter(|entry| seen.insert(entry.clone()))
            .collect())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// Simple fuzzy scoring: all query characters must appear in order,
/// consecutive matches score higher.
fn fuzzy_score(query: &str, target: &str) -> usize {
    let query_chars: Vec<char> = query.chars().collect();
    let target_chars: Vec<char> = target.chars().collect();

    let mut query_idx = 0;
    let mut target_idx = 0;
    let mut score = 0;
    let mut consecutive = 0;

    while query_idx < query_chars.len() && target_idx < target_chars.len() {
        if query_chars[query_idx] == target_chars[target_idx] {
            score += 1 + consecutive * 5;
            consecutive += 1;
            query_idx += 1;
        } else {
            consecutive = 0;
        }
        target_idx += 1;
    }

    if query_idx == query_chars.len() {
        score
    } else {
        0
    }
}
