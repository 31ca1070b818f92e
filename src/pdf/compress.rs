//! Lossless PDF restructuring.
//!
//! | level  | re-serialize | compress streams | prune + renumber |
//! |--------|--------------|------------------|------------------|
//! | low    | yes          | no               | no               |
//! | medium | yes          | yes              | no               |
//! | high   | yes          | yes              | yes              |
//!
//! Page content is never altered; images are not re-encoded.

use tracing::debug;

use super::extract::{load, page_count};
use crate::errors::Result;
use crate::types::CompressionLevel;

/// Output of [`compress`]
#[derive(Debug, Clone)]
pub struct CompressedPdf {
    pub bytes: Vec<u8>,
    pub original_size: usize,
    pub compressed_size: usize,
}

/// Rewrite `pdf_bytes` at the given level.
pub fn compress(pdf_bytes: &[u8], level: CompressionLevel) -> Result<CompressedPdf> {
    let mut doc = load(pdf_bytes)?;
    debug!(pages = page_count(&doc), ?level, "restructuring PDF");

    if level == CompressionLevel::High {
        let empty = doc.delete_zero_length_streams();
        let pruned = doc.prune_objects();
        doc.renumber_objects();
        debug!(
            empty_streams = empty.len(),
            pruned_objects = pruned.len(),
            "removed unused objects"
        );
    }
    if level != CompressionLevel::Low {
        doc.compress();
    }

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;

    debug!(
        original = pdf_bytes.len(),
        compressed = bytes.len(),
        ?level,
        "rewrote PDF"
    );

    Ok(CompressedPdf {
        original_size: pdf_bytes.len(),
        compressed_size: bytes.len(),
        bytes,
    })
}
