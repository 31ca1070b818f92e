//! Unicode-aware tokenization
//!
//! Sentence boundaries and word boundaries follow UAX #29 via the
//! `unicode-segmentation` crate.

use unicode_segmentation::UnicodeSegmentation;

use crate::types::Sentence;

/// Split `text` into trimmed, non-empty sentences.
///
/// Offsets are byte positions into `text`, so `&text[s.start..s.end] == s.text`.
pub fn sentences(text: &str) -> Vec<Sentence> {
    let mut out = Vec::new();

    for (offset, segment) in text.split_sentence_bound_indices() {
        let trimmed_start = segment.len() - segment.trim_start().len();
        let trimmed = segment.trim();
        if trimmed.is_empty() {
            continue;
        }

        let start = offset + trimmed_start;
        let end = start + trimmed.len();
        let index = out.len();
        out.push(Sentence::new(trimmed, start, end, index));
    }

    out
}

/// Split `text` into lower-cased word tokens.
///
/// Whitespace is dropped, punctuation is kept as separate tokens.
pub fn words(text: &str) -> Vec<String> {
    text.split_word_bounds()
        .filter(|w| !w.trim().is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

/// Split `text` into word tokens, preserving case.
pub fn raw_words(text: &str) -> Vec<&str> {
    text.split_word_bounds()
        .filter(|w| !w.trim().is_empty())
        .collect()
}

/// A token is content-bearing only if every character is alphanumeric.
pub fn is_alphanumeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}
