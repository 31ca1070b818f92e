//! Error types shared by every operation.
//!
//! All failures are terminal for the request that produced them; the
//! pipeline runner converts any [`ToolkitError`] into a
//! `{"success": false, "error": …}` response.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("missing required field \"{field}\" for operation {operation}")]
    MissingField {
        field: &'static str,
        operation: &'static str,
    },

    /// A request rejected by validation; the message is reported verbatim.
    #[error("{0}")]
    InvalidRequest(String),

    #[error("invalid base64 content: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("failed to process PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("failed to write document archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("language resources unavailable: {0}")]
    ResourceUnavailable(String),
}

pub type Result<T> = std::result::Result<T, ToolkitError>;
