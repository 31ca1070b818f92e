//! Core data types shared across operations.

use serde::Serialize;

/// A sentence segment of the input document.
///
/// `text` is always the exact slice `document[start..end]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// The sentence text, trimmed of surrounding whitespace
    pub text: String,
    /// Byte offset of the first character in the document
    pub start: usize,
    /// Byte offset one past the last character in the document
    pub end: usize,
    /// Position of the sentence in the document
    pub index: usize,
}

impl Sentence {
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }
}

/// Requested summary size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLength {
    Brief,
    Moderate,
    Detailed,
}

impl SummaryLength {
    /// Names match exactly; anything else, `"Brief"` included, is detailed.
    fn parse(value: &str) -> Self {
        match value {
            "brief" => SummaryLength::Brief,
            "moderate" => SummaryLength::Moderate,
            _ => SummaryLength::Detailed,
        }
    }

    /// Number of sentences a summary of this size keeps.
    pub fn target_sentences(&self) -> usize {
        match self {
            SummaryLength::Brief => 3,
            SummaryLength::Moderate => 7,
            SummaryLength::Detailed => 12,
        }
    }
}

impl std::str::FromStr for SummaryLength {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SummaryLength::parse(value))
    }
}

/// Target tone for the rewrite operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Formal,
    Casual,
    Simple,
    Technical,
}

impl Tone {
    /// Parse a tone name, case-sensitively; unrecognized names yield `None`
    /// and leave text unchanged.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "formal" => Some(Tone::Formal),
            "casual" => Some(Tone::Casual),
            "simple" => Some(Tone::Simple),
            "technical" => Some(Tone::Technical),
            _ => None,
        }
    }
}

/// How aggressively `compress_pdf` restructures the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    Low,
    Medium,
    High,
}

impl CompressionLevel {
    fn parse(value: &str) -> Self {
        match value {
            "high" => CompressionLevel::High,
            "medium" => CompressionLevel::Medium,
            _ => CompressionLevel::Low,
        }
    }
}

impl std::str::FromStr for CompressionLevel {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(CompressionLevel::parse(value))
    }
}

/// Tunables for every operation.
#[derive(Debug, Clone)]
pub struct ToolkitConfig {
    /// Stop-word language (ISO 639-1 code or English name)
    pub language: String,
    /// Keywords must be longer than this many characters minus one
    pub keyword_min_length: usize,
    /// Keyword count when the request omits `count`
    pub default_keyword_count: usize,
    /// Maximum sentences quoted in a chat answer
    pub chat_max_sentences: usize,
    /// Chance that a casual sentence ends with `!`
    pub casual_exclaim_probability: f64,
    /// Chance that a technical sentence gets an introductory phrase
    pub technical_prefix_probability: f64,
    /// Sentences with more tokens than this are shortened by the simple tone
    pub simple_max_tokens: usize,
    /// Tokens kept when the simple tone shortens a sentence
    pub simple_keep_tokens: usize,
    /// Characters of the source quoted by the translation stub
    pub translation_sample_chars: usize,
    /// File name reported for converted documents
    pub docx_filename: String,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            keyword_min_length: 3,
            default_keyword_count: 10,
            chat_max_sentences: 3,
            casual_exclaim_probability: 0.1,
            technical_prefix_probability: 0.2,
            simple_max_tokens: 15,
            simple_keep_tokens: 12,
            translation_sample_chars: 200,
            docx_filename: "converted_document.docx".to_string(),
        }
    }
}

impl ToolkitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stop-word language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the minimum keyword length
    pub fn with_keyword_min_length(mut self, min_length: usize) -> Self {
        self.keyword_min_length = min_length;
        self
    }

    pub fn with_chat_max_sentences(mut self, n: usize) -> Self {
        self.chat_max_sentences = n;
        self
    }

    /// Set both tone embellishment probabilities (clamped to `[0, 1]`)
    pub fn with_embellishment(mut self, casual: f64, technical: f64) -> Self {
        self.casual_exclaim_probability = casual.clamp(0.0, 1.0);
        self.technical_prefix_probability = technical.clamp(0.0, 1.0);
        self
    }
}
