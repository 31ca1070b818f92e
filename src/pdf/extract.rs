//! Page-by-page text extraction.

use lopdf::Document;
use tracing::debug;

use crate::errors::Result;

/// Load a PDF from memory.
pub fn load(pdf_bytes: &[u8]) -> Result<Document> {
    debug!(bytes = pdf_bytes.len(), "loading PDF");
    Ok(Document::load_mem(pdf_bytes)?)
}

/// Number of pages in the document.
pub fn page_count(doc: &Document) -> usize {
    doc.get_pages().len()
}

/// Text of every page, in page order.
pub fn page_texts(doc: &Document) -> Result<Vec<String>> {
    let pages = doc.get_pages();
    let mut texts = Vec::with_capacity(pages.len());

    for &page_number in pages.keys() {
        texts.push(doc.extract_text(&[page_number])?);
    }

    debug!(pages = texts.len(), "extracted page text");
    Ok(texts)
}

/// Whole-document text: each page followed by a blank line.
pub fn extract_text(pdf_bytes: &[u8]) -> Result<String> {
    let doc = load(pdf_bytes)?;
    let mut text = String::new();
    for page in page_texts(&doc)? {
        text.push_str(&page);
        text.push_str("\n\n");
    }
    Ok(text)
}
