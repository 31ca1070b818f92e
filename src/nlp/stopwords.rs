//! Stopword filtering
//!
//! Multi-language stopword sets backed by the NLTK lists of the `stop-words`
//! crate, plus support for custom lists.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// ISO 639-1 codes of every language with a bundled stopword list.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "de", "fr", "es", "it", "pt", "nl", "ru", "sv", "no", "da", "fi", "hu", "tr", "ar", "el",
    "ro",
];

/// A filter for removing stopwords from text
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a new stopword filter for the given language
    ///
    /// Unknown languages fall back to English; use [`StopwordFilter::for_language`]
    /// when the fallback is not wanted.
    pub fn new(language: &str) -> Self {
        let stopwords =
            Self::load_stopwords(Self::language_id(language).unwrap_or(LANGUAGE::English));
        Self { stopwords }
    }

    /// Create a filter only if `language` has a bundled list
    pub fn for_language(language: &str) -> Option<Self> {
        Self::language_id(language).map(|lang| Self {
            stopwords: Self::load_stopwords(lang),
        })
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn language_id(language: &str) -> Option<LANGUAGE> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            "el" | "greek" => LANGUAGE::Greek,
            "ro" | "romanian" => LANGUAGE::Romanian,
            _ => return None,
        };
        Some(lang)
    }

    fn load_stopwords(lang: LANGUAGE) -> FxHashSet<String> {
        get(lang).iter().map(|s| s.to_lowercase()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::new("en");

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The")); // case insensitive
        assert!(filter.is_stopword("is"));
        assert!(filter.is_stopword("a"));
        assert!(!filter.is_stopword("machine"));
        assert!(!filter.is_stopword("learning"));
    }

    #[test]
    fn test_english_list_is_nltk() {
        let filter = StopwordFilter::new("en");

        assert!(filter.len() < 200, "unexpected list size {}", filter.len());
        for word in ["great", "system", "important", "information", "world", "new", "value"] {
            assert!(!filter.is_stopword(word), "{word} should be a content word");
        }
        for word in ["too", "can", "what", "about"] {
            assert!(filter.is_stopword(word), "{word} should be a stopword");
        }
    }

    #[test]
    fn test_custom_stopwords() {
        let filter = StopwordFilter::from_list(&["Custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("WORDS"));
        assert!(!filter.is_stopword("the"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let filter = StopwordFilter::new("klingon");
        assert!(filter.is_stopword("the"));
    }

    #[test]
    fn test_for_language_rejects_unknown() {
        assert!(StopwordFilter::for_language("klingon").is_none());
        assert!(StopwordFilter::for_language("german").is_some());
    }

    #[test]
    fn test_every_supported_language_loads() {
        for code in SUPPORTED_LANGUAGES {
            let filter = StopwordFilter::for_language(code).expect("bundled list");
            assert!(!filter.is_empty(), "{code} list is empty");
        }
    }
}
