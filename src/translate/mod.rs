//! Translation placeholder
//!
//! No translation engine is bundled. The operation detects the source
//! language and returns an explanatory message in place of translated text,
//! keeping the request/response contract intact for callers.

use crate::nlp::language::LanguageDetector;

/// Result of a simulated translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
}

#[derive(Debug)]
pub struct TranslationStub<'a> {
    detector: &'a LanguageDetector,
    sample_chars: usize,
}

impl<'a> TranslationStub<'a> {
    pub fn new(detector: &'a LanguageDetector) -> Self {
        Self {
            detector,
            sample_chars: 200,
        }
    }

    /// Set how many characters of the source are quoted in the message
    pub fn with_sample_chars(mut self, n: usize) -> Self {
        self.sample_chars = n;
        self
    }

    pub fn translate(&self, text: &str, target_language: &str) -> Translation {
        let source = self.detector.detect(text).unwrap_or("unknown");
        let sample: String = text.chars().take(self.sample_chars).collect();

        let message = format!(
            "\nTRANSLATION SIMULATION\n\
             \n\
             [Source detected as: {source}]\n\
             [Target language: {target_language}]\n\
             \n\
             The actual translation from {source} to {target_language} would require an external \n\
             translation service or library like Google Translate API, DeepL, or Lingva Translate.\n\
             \n\
             In a production environment, this function would:\n\
             1. Connect to a translation API\n\
             2. Send the text for translation\n\
             3. Return the translated content\n\
             \n\
             For a free alternative, consider using:\n\
             - LibreTranslate (open-source)\n\
             - Lingva Translate (open-source)\n\
             - Argos Translate (open-source)\n\
             \n\
             Sample of original text:\n\
             {sample}...\n"
        );

        Translation {
            translated_text: message,
            source_language: source.to_string(),
            target_language: target_language.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_languages() {
        let detector = LanguageDetector::new();
        let result = TranslationStub::new(&detector)
            .translate("This is a short note about the weather and the sea.", "fr");

        assert_eq!(result.source_language, "en");
        assert_eq!(result.target_language, "fr");
        assert!(result.translated_text.contains("[Source detected as: en]"));
        assert!(result.translated_text.contains("[Target language: fr]"));
    }

    #[test]
    fn test_message_template_lines() {
        let detector = LanguageDetector::new();
        let result = TranslationStub::new(&detector).translate("Hola", "en");

        let text = &result.translated_text;
        assert!(text.starts_with("\nTRANSLATION SIMULATION\n"));
        assert!(text.contains("\nIn a production environment, this function would:\n1. Connect"));
        assert!(text.ends_with("Sample of original text:\nHola...\n"));
    }

    #[test]
    fn test_sample_is_truncated_by_chars() {
        let detector = LanguageDetector::new();
        let text = "é".repeat(300);
        let result = TranslationStub::new(&detector).translate(&text, "de");

        assert_eq!(result.source_language, "unknown");
        let expected = format!("{}...", "é".repeat(200));
        assert!(result.translated_text.contains(&expected));
        assert!(!result.translated_text.contains(&"é".repeat(201)));
    }
}
