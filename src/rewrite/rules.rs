//! Substitution tables for tone rewriting.
//!
//! Substitutions are applied in table order, literally and case-sensitively.

/// Contractions and slang expanded by the formal tone.
pub const FORMAL_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("don't", "do not"),
    ("can't", "cannot"),
    ("won't", "will not"),
    ("I'm", "I am"),
    ("you're", "you are"),
    ("they're", "they are"),
    ("we're", "we are"),
    ("it's", "it is"),
    ("let's", "let us"),
    ("gonna", "going to"),
    ("wanna", "want to"),
];

/// Expansions contracted by the casual tone.
pub const CASUAL_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("do not", "don't"),
    ("cannot", "can't"),
    ("will not", "won't"),
    ("I am", "I'm"),
    ("you are", "you're"),
    ("they are", "they're"),
    ("we are", "we're"),
    ("it is", "it's"),
    ("let us", "let's"),
];

/// Openers the technical tone may prepend to a sentence.
pub const TECHNICAL_PHRASES: &[&str] = &[
    "Based on the analysis, ",
    "Research indicates that ",
    "As per the specification, ",
    "The data demonstrates that ",
    "According to the findings, ",
];

/// Apply every `(from, to)` pair of `table` to `sentence`, in order.
pub fn apply(sentence: &str, table: &[(&str, &str)]) -> String {
    table
        .iter()
        .fold(sentence.to_string(), |acc, (from, to)| acc.replace(from, to))
}
