//! Response model.
//!
//! Every response is a flat JSON object carrying `success` plus the fields
//! of exactly one [`Payload`] variant.

use serde::Serialize;

/// Operation-specific response fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Text {
        text: String,
    },
    Compressed {
        pdf: String,
        compression_level: String,
        original_size: usize,
        compressed_size: usize,
    },
    Docx {
        docx: String,
        filename: String,
    },
    Summary {
        summary: String,
        length: String,
    },
    Keywords {
        keywords: Vec<String>,
        count: usize,
    },
    Rewritten {
        rewritten_text: String,
        tone: String,
    },
    Answer {
        answer: String,
    },
    Translation {
        translated_text: String,
        source_language: String,
        target_language: String,
    },
    Error {
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub success: bool,
    #[serde(flatten)]
    pub payload: Payload,
}

impl Response {
    pub fn success(payload: Payload) -> Self {
        Self {
            success: true,
            payload,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            payload: Payload::Error {
                error: error.into(),
            },
        }
    }

    /// Serialize as a single-line JSON object.
    pub fn to_json(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => json,
            // Only string and integer fields; serialization cannot fail in practice.
            Err(e) => format!(
                r#"{{"success":false,"error":{}}}"#,
                serde_json::Value::String(e.to_string())
            ),
        }
    }
}
