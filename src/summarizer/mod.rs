//! Summarization components
//!
//! Extractive summarization by word-frequency sentence scoring. A summary is
//! always a subset of the original sentences, kept in their original order.

pub mod scorer;
pub mod selector;

use tracing::{debug, warn};

use crate::nlp::frequency::FrequencyTable;
use crate::nlp::tokenizer::sentences;
use crate::nlp::NlpResources;
use crate::types::SummaryLength;
use scorer::SentenceScorer;
use selector::SentenceSelector;

/// Frequency-scoring extractive summarizer
#[derive(Debug)]
pub struct Summarizer<'a> {
    resources: &'a NlpResources,
}

impl<'a> Summarizer<'a> {
    pub fn new(resources: &'a NlpResources) -> Self {
        Self { resources }
    }

    /// Summarize `text` down to the sentence budget of `length`.
    ///
    /// Texts that already fit the budget are returned unchanged.
    pub fn summarize(&self, text: &str, length: SummaryLength) -> String {
        if let Some(lang) = self.resources.detector.detect(text) {
            if lang != "en" {
                warn!(language = lang, "input is not English; summary quality may suffer");
            }
        }

        let target = length.target_sentences();
        let sents = sentences(text);
        debug!(sentences = sents.len(), target, "segmented document");

        if sents.len() <= target {
            return text.to_string();
        }

        let frequencies = FrequencyTable::build(text, &self.resources.stopwords);
        let scores = SentenceScorer::new(&frequencies).score_all(&sents);

        SentenceSelector::new()
            .with_num_sentences(target)
            .select(&sents, &scores)
            .text()
    }
}
