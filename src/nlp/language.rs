//! Stopword-overlap language identification
//!
//! Every supported language votes with the share of word tokens found in its
//! stopword list. The best language wins if it clears both a minimum hit
//! count and a minimum share of the text.

use super::stopwords::{StopwordFilter, SUPPORTED_LANGUAGES};
use super::tokenizer::{is_alphanumeric, words};

/// Stopword hits a language needs before it can be reported.
const MIN_HITS: usize = 2;
/// Share of word tokens that must be stopwords of the winning language.
const MIN_RATIO: f64 = 0.05;

/// Detects the dominant language of a text.
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    languages: Vec<(&'static str, StopwordFilter)>,
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector {
    /// Create a detector over every bundled stopword language
    pub fn new() -> Self {
        let languages = SUPPORTED_LANGUAGES
            .iter()
            .filter_map(|&code| StopwordFilter::for_language(code).map(|f| (code, f)))
            .collect();
        Self { languages }
    }

    /// Create a detector from explicit `(code, filter)` pairs.
    pub fn from_filters(languages: Vec<(&'static str, StopwordFilter)>) -> Self {
        Self { languages }
    }

    /// Return the ISO 639-1 code of the dominant language, if any.
    ///
    /// Ties go to the language listed first.
    pub fn detect(&self, text: &str) -> Option<&'static str> {
        let tokens: Vec<String> = words(text)
            .into_iter()
            .filter(|w| is_alphanumeric(w))
            .collect();
        if tokens.is_empty() {
            return None;
        }

        let mut best: Option<(&'static str, usize)> = None;
        for (code, filter) in &self.languages {
            let hits = tokens.iter().filter(|t| filter.is_stopword(t)).count();
            if best.map_or(true, |(_, h)| hits > h) {
                best = Some((*code, hits));
            }
        }

        let (code, hits) = best?;
        let ratio = hits as f64 / tokens.len() as f64;
        if hits >= MIN_HITS && ratio >= MIN_RATIO {
            Some(code)
        } else {
            None
        }
    }
}
