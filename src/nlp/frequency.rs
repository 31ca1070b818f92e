//! Word frequency tables over content tokens.

use rustc_hash::FxHashMap;

use super::stopwords::StopwordFilter;
use super::tokenizer::{is_alphanumeric, words};

/// Occurrence counts of content tokens in a document.
///
/// A content token is lower-cased, alphanumeric, not a stopword and at least
/// `min_length` characters long.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: FxHashMap<String, usize>,
    /// Tokens in order of first occurrence, for deterministic ranking
    order: Vec<String>,
}

impl FrequencyTable {
    /// Build a table over every content token in `text`.
    pub fn build(text: &str, stopwords: &StopwordFilter) -> Self {
        Self::build_with_min_length(text, stopwords, 1)
    }

    /// Build a table, skipping tokens shorter than `min_length` characters.
    pub fn build_with_min_length(text: &str, stopwords: &StopwordFilter, min_length: usize) -> Self {
        let mut table = Self::default();

        for word in words(text) {
            if !is_alphanumeric(&word)
                || stopwords.is_stopword(&word)
                || word.chars().count() < min_length
            {
                continue;
            }
            table.add(word);
        }

        table
    }

    fn add(&mut self, word: String) {
        match self.counts.get_mut(&word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.clone(), 1);
                self.order.push(word);
            }
        }
    }

    /// Occurrence count of `token` (zero when absent).
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Tokens by non-increasing count; ties keep first-occurrence order.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .order
            .iter()
            .map(|w| (w.as_str(), self.get(w)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}
