//! Top-K sentence selection for summarization
//!
//! Picks the highest-scoring sentences and returns them in document order.

use super::scorer::SentenceScore;
use crate::types::Sentence;

/// Configuration for sentence selection
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Number of sentences to select
    pub num_sentences: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self { num_sentences: 3 }
    }
}

/// Result of sentence selection
#[derive(Debug, Clone)]
pub struct SummaryResult {
    /// Selected sentences in document order
    pub sentences: Vec<SelectedSentence>,
}

impl SummaryResult {
    /// Join the selected sentences with single spaces.
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.sentence.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A selected sentence with its score
#[derive(Debug, Clone)]
pub struct SelectedSentence {
    pub sentence: Sentence,
    pub score: f64,
}

/// Score-ranked sentence selector
#[derive(Debug)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self {
            config: SelectorConfig::default(),
        }
    }

    /// Set number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.config.num_sentences = n;
        self
    }

    /// Select the top sentences by score.
    ///
    /// The sort is stable, so equal scores keep document order. Scores that
    /// point at unknown sentence indices are ignored.
    pub fn select(&self, sentences: &[Sentence], scores: &[SentenceScore]) -> SummaryResult {
        let mut ranked: Vec<&SentenceScore> = scores
            .iter()
            .filter(|s| s.index < sentences.len())
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(self.config.num_sentences);

        let mut selected: Vec<SelectedSentence> = ranked
            .into_iter()
            .map(|s| SelectedSentence {
                sentence: sentences[s.index].clone(),
                score: s.score,
            })
            .collect();

        // Sort by document order
        selected.sort_by_key(|s| s.sentence.index);

        SummaryResult {
            sentences: selected,
        }
    }
}
