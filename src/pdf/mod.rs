//! PDF operations
//!
//! Text extraction, lossless restructuring and PDF → DOCX conversion, all
//! operating on in-memory bytes. Callers pass base64 text on the wire; the
//! helpers here decode and encode it.

pub mod compress;
pub mod docx;
pub mod extract;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use crate::errors::Result;
use docx::DocxBuilder;

/// Decode base64 content, ignoring embedded whitespace and line breaks.
pub fn decode_base64(content: &str) -> Result<Vec<u8>> {
    let compact: String = content.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(STANDARD.decode(compact)?)
}

pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Convert a PDF to `.docx` bytes: one paragraph per page, page breaks between.
pub fn to_docx(pdf_bytes: &[u8]) -> Result<Vec<u8>> {
    let doc = extract::load(pdf_bytes)?;
    let pages = extract::page_texts(&doc)?;

    let mut builder = DocxBuilder::new();
    for (i, text) in pages.iter().enumerate() {
        if i > 0 {
            builder.add_page_break();
        }
        builder.add_paragraph(text.trim_end_matches('\n'));
    }

    let bytes = builder.to_bytes()?;
    debug!(pages = pages.len(), docx_bytes = bytes.len(), "converted PDF to DOCX");
    Ok(bytes)
}
