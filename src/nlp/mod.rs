//! Natural Language Processing components
//!
//! This module provides tokenization, stopword filtering, word frequency
//! tables and language identification.

pub mod frequency;
pub mod language;
pub mod stopwords;
pub mod tokenizer;

use tracing::debug;

use crate::errors::{Result, ToolkitError};
use language::LanguageDetector;
use stopwords::StopwordFilter;

/// Language resources loaded once, before any operation runs.
#[derive(Debug, Clone)]
pub struct NlpResources {
    /// Stopwords for the processing language
    pub stopwords: StopwordFilter,
    pub detector: LanguageDetector,
}

impl NlpResources {
    /// Load the stopword list for `language` and the language detector.
    ///
    /// Fails if the language has no bundled list or the list is empty.
    pub fn initialize(language: &str) -> Result<Self> {
        let stopwords = StopwordFilter::for_language(language).ok_or_else(|| {
            ToolkitError::ResourceUnavailable(format!("no stopword list for \"{language}\""))
        })?;
        if stopwords.is_empty() {
            return Err(ToolkitError::ResourceUnavailable(format!(
                "stopword list for \"{language}\" is empty"
            )));
        }

        debug!(language, stopwords = stopwords.len(), "loaded language resources");

        Ok(Self {
            stopwords,
            detector: LanguageDetector::new(),
        })
    }
}
