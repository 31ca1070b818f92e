//! Request runner: validation, dispatch and error conversion.
//!
//! The [`Processor`] owns the configuration and the language resources
//! loaded at start-up. [`Processor::handle`] resolves the operation,
//! validates the request, runs the operation inside a tracing span and
//! turns any [`ToolkitError`] into a failure [`Response`]. Nothing escapes
//! this boundary as a panic or an `Err`.

use rand::Rng;
use serde_json::Value;
use tracing::{debug, info_span, warn};

use crate::chat::DocumentChat;
use crate::errors::{Result, ToolkitError};
use crate::keywords::KeywordExtractor;
use crate::nlp::NlpResources;
use crate::pdf::{self, compress, extract};
use crate::pipeline::request::{Operation, Request};
use crate::pipeline::response::{Payload, Response};
use crate::pipeline::validation::ValidationEngine;
use crate::rewrite::ToneRewriter;
use crate::summarizer::Summarizer;
use crate::translate::TranslationStub;
use crate::types::{CompressionLevel, SummaryLength, Tone, ToolkitConfig};

pub const UNKNOWN_OPERATION: &str = "Unknown operation";

const DEFAULT_COMPRESSION_LEVEL: &str = "medium";
const DEFAULT_LENGTH: &str = "moderate";
const DEFAULT_TONE: &str = "formal";

/// Fetch a field that validation has already checked.
fn require<'r>(
    value: Option<&'r str>,
    field: &'static str,
    operation: Operation,
) -> Result<&'r str> {
    value.ok_or(ToolkitError::MissingField {
        field,
        operation: operation.as_str(),
    })
}

// ============================================================================
// Processor
// ============================================================================

pub struct Processor {
    config: ToolkitConfig,
    resources: NlpResources,
    validator: ValidationEngine,
}

impl Processor {
    /// Load language resources for `config.language`.
    ///
    /// Fails before any request is read if the resources are unavailable.
    pub fn new(config: ToolkitConfig) -> Result<Self> {
        let resources = NlpResources::initialize(&config.language)?;
        Ok(Self {
            config,
            resources,
            validator: ValidationEngine::with_defaults(),
        })
    }

    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    /// Parse one JSON request and return the JSON response.
    ///
    /// The operation is resolved from the raw object first, so a request
    /// with an unknown or non-string `operation` is always reported as
    /// unknown, whatever the other fields hold.
    pub fn process_json<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> String {
        self.process_value(input, rng).to_json()
    }

    fn process_value<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> Response {
        let value: Value = match serde_json::from_str(input) {
            Ok(value) => value,
            Err(e) => return Response::failure(ToolkitError::from(e).to_string()),
        };

        let known = value
            .get("operation")
            .and_then(Value::as_str)
            .and_then(Operation::from_name);
        if known.is_none() {
            debug!(operation = ?value.get("operation"), "rejecting unknown operation");
            return Response::failure(UNKNOWN_OPERATION);
        }

        match serde_json::from_value::<Request>(value) {
            Ok(request) => self.handle(&request, rng),
            Err(e) => Response::failure(ToolkitError::from(e).to_string()),
        }
    }

    /// Run one request.
    pub fn handle<R: Rng + ?Sized>(&self, request: &Request, rng: &mut R) -> Response {
        let Some(operation) = request.operation() else {
            debug!(operation = ?request.operation, "rejecting unknown operation");
            return Response::failure(UNKNOWN_OPERATION);
        };

        let span = info_span!("operation", name = operation.as_str());
        let _guard = span.enter();

        match self.run(operation, request, rng) {
            Ok(payload) => Response::success(payload),
            Err(e) => {
                debug!(error = %e, "operation failed");
                Response::failure(e.to_string())
            }
        }
    }

    fn run<R: Rng + ?Sized>(
        &self,
        operation: Operation,
        request: &Request,
        rng: &mut R,
    ) -> Result<Payload> {
        let report = self.validator.validate(request, operation);
        for warning in report.warnings() {
            warn!(path = %warning.path, "{}", warning.message);
        }
        if let Some(error) = report.errors().next() {
            return Err(ToolkitError::InvalidRequest(error.message.clone()));
        }

        match operation {
            Operation::ExtractText => {
                let bytes = pdf::decode_base64(require(
                    request.pdf_content.as_deref(),
                    "pdf_content",
                    operation,
                )?)?;
                let text = extract::extract_text(&bytes)?;
                debug!(chars = text.len(), "extracted text");
                Ok(Payload::Text { text })
            }

            Operation::CompressPdf => {
                let bytes = pdf::decode_base64(require(
                    request.pdf_content.as_deref(),
                    "pdf_content",
                    operation,
                )?)?;
                let level_name = request
                    .compression_level
                    .as_deref()
                    .unwrap_or(DEFAULT_COMPRESSION_LEVEL);
                let level: CompressionLevel = level_name.parse().unwrap_or(CompressionLevel::Low);
                let out = compress::compress(&bytes, level)?;
                Ok(Payload::Compressed {
                    pdf: pdf::encode_base64(&out.bytes),
                    compression_level: level_name.to_string(),
                    original_size: out.original_size,
                    compressed_size: out.compressed_size,
                })
            }

            Operation::PdfToDocx => {
                let bytes = pdf::decode_base64(require(
                    request.pdf_content.as_deref(),
                    "pdf_content",
                    operation,
                )?)?;
                let docx = pdf::to_docx(&bytes)?;
                Ok(Payload::Docx {
                    docx: pdf::encode_base64(&docx),
                    filename: self.config.docx_filename.clone(),
                })
            }

            Operation::Summarize => {
                let text = require(request.text.as_deref(), "text", operation)?;
                let length_name = request.length.as_deref().unwrap_or(DEFAULT_LENGTH);
                let length: SummaryLength = length_name.parse().unwrap_or(SummaryLength::Detailed);
                let summary = Summarizer::new(&self.resources).summarize(text, length);
                Ok(Payload::Summary {
                    summary,
                    length: length_name.to_string(),
                })
            }

            Operation::ExtractKeywords => {
                let text = require(request.text.as_deref(), "text", operation)?;
                let count = request.count.unwrap_or(self.config.default_keyword_count);
                let keywords = KeywordExtractor::new(&self.resources.stopwords)
                    .with_min_length(self.config.keyword_min_length)
                    .extract(text, count);
                Ok(Payload::Keywords {
                    count: keywords.len(),
                    keywords,
                })
            }

            Operation::Rewrite => {
                let text = require(request.text.as_deref(), "text", operation)?;
                let tone_name = request.tone.as_deref().unwrap_or(DEFAULT_TONE);
                let rewritten_text =
                    ToneRewriter::new(&self.config).rewrite(text, Tone::parse(tone_name), rng);
                Ok(Payload::Rewritten {
                    rewritten_text,
                    tone: tone_name.to_string(),
                })
            }

            Operation::Chat => {
                let text = require(request.text.as_deref(), "text", operation)?;
                let question = require(request.question.as_deref(), "question", operation)?;
                let answer = DocumentChat::new(&self.resources.stopwords)
                    .with_max_sentences(self.config.chat_max_sentences)
                    .answer(text, question);
                Ok(Payload::Answer { answer })
            }

            Operation::Translate => {
                let text = require(request.text.as_deref(), "text", operation)?;
                let target =
                    require(request.target_language.as_deref(), "target_language", operation)?;
                let t = TranslationStub::new(&self.resources.detector)
                    .with_sample_chars(self.config.translation_sample_chars)
                    .translate(text, target);
                Ok(Payload::Translation {
                    translated_text: t.translated_text,
                    source_language: t.source_language,
                    target_language: t.target_language,
                })
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
