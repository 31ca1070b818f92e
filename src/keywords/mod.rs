//! Frequency-based keyword extraction

use crate::nlp::frequency::FrequencyTable;
use crate::nlp::stopwords::StopwordFilter;

/// Extracts the most frequent content words of a text.
#[derive(Debug)]
pub struct KeywordExtractor<'a> {
    stopwords: &'a StopwordFilter,
    min_length: usize,
}

impl<'a> KeywordExtractor<'a> {
    /// Create an extractor with the default minimum length of 3 characters
    pub fn new(stopwords: &'a StopwordFilter) -> Self {
        Self {
            stopwords,
            min_length: 3,
        }
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Return at most `count` keywords by non-increasing frequency.
    pub fn extract(&self, text: &str, count: usize) -> Vec<String> {
        let table = FrequencyTable::build_with_min_length(text, self.stopwords, self.min_length);
        table
            .ranked()
            .into_iter()
            .take(count)
            .map(|(word, _)| word.to_string())
            .collect()
    }
}
