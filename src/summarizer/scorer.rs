//! Frequency-based sentence scoring
//!
//! score(s) = Σ freq(t) for content tokens t in s / max(1, |tokens(s)|)
//!
//! The divisor counts every token, punctuation included, so long sentences
//! are not favoured merely for containing more words.

use crate::nlp::frequency::FrequencyTable;
use crate::nlp::tokenizer::words;
use crate::types::Sentence;

/// A sentence index paired with its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentenceScore {
    pub index: usize,
    pub score: f64,
}

/// Scores sentences against a document-wide [`FrequencyTable`].
#[derive(Debug)]
pub struct SentenceScorer<'a> {
    frequencies: &'a FrequencyTable,
}

impl<'a> SentenceScorer<'a> {
    pub fn new(frequencies: &'a FrequencyTable) -> Self {
        Self { frequencies }
    }

    /// Score a single sentence
    pub fn score(&self, sentence: &Sentence) -> f64 {
        let tokens = words(&sentence.text);
        let total: usize = tokens.iter().map(|t| self.frequencies.get(t)).sum();
        total as f64 / tokens.len().max(1) as f64
    }

    /// Score every sentence, in document order
    pub fn score_all(&self, sentences: &[Sentence]) -> Vec<SentenceScore> {
        sentences
            .iter()
            .map(|s| SentenceScore {
                index: s.index,
                score: self.score(s),
            })
            .collect()
    }
}
