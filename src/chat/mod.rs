//! Keyword-overlap question answering
//!
//! Answers a question by quoting the document sentences that mention the
//! most question keywords. Matching is literal substring containment on the
//! lower-cased sentence.

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{is_alphanumeric, sentences, words};

pub const ANSWER_PREFIX: &str = "Based on the document content, here's what I found: ";
pub const NO_ANSWER: &str = "I couldn't find specific information about that in the document. \
                             Please ask another question or try rephrasing your query.";

/// Sentence-overlap responder
#[derive(Debug)]
pub struct DocumentChat<'a> {
    stopwords: &'a StopwordFilter,
    max_sentences: usize,
}

impl<'a> DocumentChat<'a> {
    pub fn new(stopwords: &'a StopwordFilter) -> Self {
        Self {
            stopwords,
            max_sentences: 3,
        }
    }

    /// Set the maximum number of quoted sentences
    pub fn with_max_sentences(mut self, n: usize) -> Self {
        self.max_sentences = n;
        self
    }

    /// Content keywords of the question, in order, duplicates kept.
    pub fn question_keywords(&self, question: &str) -> Vec<String> {
        words(question)
            .into_iter()
            .filter(|w| is_alphanumeric(w) && !self.stopwords.is_stopword(w))
            .collect()
    }

    /// Answer `question` from `document`.
    pub fn answer(&self, document: &str, question: &str) -> String {
        let keywords = self.question_keywords(question);

        let mut scored: Vec<(String, usize)> = sentences(document)
            .into_iter()
            .map(|s| {
                let lower = s.text.to_lowercase();
                let score = keywords.iter().filter(|k| lower.contains(k.as_str())).count();
                (s.text, score)
            })
            .collect();

        // Stable: equal scores keep document order
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        let matching: Vec<String> = scored
            .into_iter()
            .filter(|(_, score)| *score > 0)
            .take(self.max_sentences)
            .map(|(text, _)| text)
            .collect();

        if matching.is_empty() {
            NO_ANSWER.to_string()
        } else {
            format!("{ANSWER_PREFIX}{}", matching.join(" "))
        }
    }
}
