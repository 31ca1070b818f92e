//! Request model.
//!
//! A [`Request`] names one operation and carries the fields that operation
//! reads. Every field except `operation` is optional on the wire; the
//! [`super::validation::ValidationEngine`] decides which ones are required.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "operation": "summarize",
//!   "text": "First sentence. Second sentence.",
//!   "length": "brief"
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One operation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Request {
    /// Operation name (see [`Operation`]).
    #[serde(default)]
    pub operation: Option<String>,

    /// Base64-encoded PDF bytes.
    #[serde(default)]
    pub pdf_content: Option<String>,

    #[serde(default)]
    pub text: Option<String>,

    /// `low`, `medium` or `high`; defaults to `medium`.
    #[serde(default)]
    pub compression_level: Option<String>,

    /// `brief`, `moderate` or `detailed`; defaults to `moderate`.
    #[serde(default)]
    pub length: Option<String>,

    /// Maximum keywords; defaults to 10.
    #[serde(default)]
    pub count: Option<usize>,

    /// `formal`, `casual`, `simple` or `technical`; defaults to `formal`.
    #[serde(default)]
    pub tone: Option<String>,

    #[serde(default)]
    pub question: Option<String>,

    #[serde(default)]
    pub target_language: Option<String>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Request {
    /// Resolve the operation name, if it is one this crate knows.
    pub fn operation(&self) -> Option<Operation> {
        self.operation.as_deref().and_then(Operation::from_name)
    }
}

/// The eight supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ExtractText,
    CompressPdf,
    PdfToDocx,
    Summarize,
    ExtractKeywords,
    Rewrite,
    Chat,
    Translate,
}

impl Operation {
    pub fn from_name(name: &str) -> Option<Self> {
        let op = match name {
            "extract_text" => Self::ExtractText,
            "compress_pdf" => Self::CompressPdf,
            "pdf_to_docx" => Self::PdfToDocx,
            "summarize" => Self::Summarize,
            "extract_keywords" => Self::ExtractKeywords,
            "rewrite" => Self::Rewrite,
            "chat" => Self::Chat,
            "translate" => Self::Translate,
            _ => return None,
        };
        Some(op)
    }

    /// Returns the wire name used in JSON and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExtractText => "extract_text",
            Self::CompressPdf => "compress_pdf",
            Self::PdfToDocx => "pdf_to_docx",
            Self::Summarize => "summarize",
            Self::ExtractKeywords => "extract_keywords",
            Self::Rewrite => "rewrite",
            Self::Chat => "chat",
            Self::Translate => "translate",
        }
    }

    /// Fields that must be present for this operation.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Self::ExtractText | Self::CompressPdf | Self::PdfToDocx => &["pdf_content"],
            Self::Summarize | Self::ExtractKeywords | Self::Rewrite => &["text"],
            Self::Chat => &["text", "question"],
            Self::Translate => &["text", "target_language"],
        }
    }
}
