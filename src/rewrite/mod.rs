//! Tone rewriting
//!
//! Sentence-by-sentence rule-based rewriting. The casual and technical tones
//! embellish sentences at random; the random source is passed in so callers
//! can seed it.

pub mod rules;

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

use crate::nlp::tokenizer::{raw_words, sentences};
use crate::types::{Tone, ToolkitConfig};
use rules::{apply, CASUAL_SUBSTITUTIONS, FORMAL_SUBSTITUTIONS, TECHNICAL_PHRASES};

/// Rule-based tone rewriter
#[derive(Debug)]
pub struct ToneRewriter<'a> {
    config: &'a ToolkitConfig,
    exclamations: Regex,
}

impl<'a> ToneRewriter<'a> {
    pub fn new(config: &'a ToolkitConfig) -> Self {
        Self {
            config,
            exclamations: Regex::new(r"!+").expect("static pattern"),
        }
    }

    /// Rewrite `text` in `tone`. A `None` tone re-joins the sentences untouched.
    pub fn rewrite<R: Rng + ?Sized>(&self, text: &str, tone: Option<Tone>, rng: &mut R) -> String {
        sentences(text)
            .iter()
            .map(|s| match tone {
                Some(Tone::Formal) => self.formal(&s.text),
                Some(Tone::Casual) => self.casual(&s.text, rng),
                Some(Tone::Simple) => self.simple(&s.text),
                Some(Tone::Technical) => self.technical(&s.text, rng),
                None => s.text.clone(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn formal(&self, sentence: &str) -> String {
        let expanded = apply(sentence, FORMAL_SUBSTITUTIONS);
        self.exclamations.replace_all(&expanded, ".").into_owned()
    }

    fn casual<R: Rng + ?Sized>(&self, sentence: &str, rng: &mut R) -> String {
        let sentence = if rng.gen::<f64>() < self.config.casual_exclaim_probability {
            format!("{}!", sentence.trim_end_matches('.'))
        } else {
            sentence.to_string()
        };
        apply(&sentence, CASUAL_SUBSTITUTIONS)
    }

    fn simple(&self, sentence: &str) -> String {
        let tokens = raw_words(sentence);
        if tokens.len() > self.config.simple_max_tokens {
            let kept = &tokens[..self.config.simple_keep_tokens.min(tokens.len())];
            format!("{}.", kept.join(" "))
        } else {
            sentence.to_string()
        }
    }

    fn technical<R: Rng + ?Sized>(&self, sentence: &str, rng: &mut R) -> String {
        if rng.gen::<f64>() >= self.config.technical_prefix_probability {
            return sentence.to_string();
        }
        let Some(phrase) = TECHNICAL_PHRASES.choose(rng) else {
            return sentence.to_string();
        };

        let mut chars = sentence.chars();
        match chars.next() {
            Some(first) => format!("{phrase}{}{}", first.to_lowercase(), chars.as_str()),
            None => sentence.to_string(),
        }
    }
}
