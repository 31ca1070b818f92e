//! # pdf-toolkit
//!
//! PDF utilities and extractive text processing behind a single JSON
//! request/response interface.
//!
//! PDF operations: text extraction, lossless compression, conversion to
//! `.docx`. Text operations: frequency-based summarization, keyword
//! extraction, tone rewriting, keyword-overlap question answering and a
//! translation placeholder.
//!
//! ## Example
//!
//! ```rust,ignore
//! use pdf_toolkit::{Processor, ToolkitConfig};
//!
//! let processor = Processor::new(ToolkitConfig::default())?;
//! let out = processor.process_json(
//!     r#"{"operation": "extract_keywords", "text": "Rust is fast. Rust is safe.", "count": 2}"#,
//!     &mut rand::thread_rng(),
//! );
//! ```

pub mod chat;
pub mod errors;
pub mod keywords;
pub mod nlp;
pub mod pdf;
pub mod pipeline;
pub mod rewrite;
pub mod summarizer;
pub mod translate;
pub mod types;

pub use errors::{Result, ToolkitError};
pub use pipeline::request::{Operation, Request};
pub use pipeline::response::{Payload, Response};
pub use pipeline::runner::Processor;
pub use types::{CompressionLevel, SummaryLength, Tone, ToolkitConfig};
