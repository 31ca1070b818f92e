//! Minimal WordprocessingML writer
//!
//! Produces a `.docx` package with the three parts Word requires:
//! `[Content_Types].xml`, `_rels/.rels` and `word/document.xml`.

use std::io::{Cursor, Write};

use regex::Regex;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::errors::Result;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_HEAD: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#;

const DOCUMENT_TAIL: &str = "<w:sectPr/></w:body></w:document>";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Block {
    Paragraph(String),
    PageBreak,
}

/// Builds a `.docx` document from paragraphs and page breaks.
#[derive(Debug)]
pub struct DocxBuilder {
    blocks: Vec<Block>,
    control_chars: Regex,
}

impl Default for DocxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            // Characters XML 1.0 cannot carry
            control_chars: Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F]").expect("static pattern"),
        }
    }

    /// Append a paragraph; embedded newlines become line breaks.
    pub fn add_paragraph(&mut self, text: &str) -> &mut Self {
        let cleaned = self.control_chars.replace_all(text, "").replace('\r', "");
        self.blocks.push(Block::Paragraph(cleaned));
        self
    }

    pub fn add_page_break(&mut self) -> &mut Self {
        self.blocks.push(Block::PageBreak);
        self
    }

    /// Render `word/document.xml`.
    pub fn document_xml(&self) -> String {
        let mut xml = String::from(DOCUMENT_HEAD);

        for block in &self.blocks {
            match block {
                Block::PageBreak => xml.push_str(r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#),
                Block::Paragraph(text) => {
                    xml.push_str("<w:p><w:r>");
                    for (i, line) in text.split('\n').enumerate() {
                        if i > 0 {
                            xml.push_str("<w:br/>");
                        }
                        xml.push_str(r#"<w:t xml:space="preserve">"#);
                        xml.push_str(&escape_xml(line));
                        xml.push_str("</w:t>");
                    }
                    xml.push_str("</w:r></w:p>");
                }
            }
        }

        xml.push_str(DOCUMENT_TAIL);
        xml
    }

    /// Package the document as `.docx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(CONTENT_TYPES.as_bytes())?;

        zip.start_file("_rels/.rels", options)?;
        zip.write_all(PACKAGE_RELS.as_bytes())?;

        zip.start_file("word/document.xml", options)?;
        zip.write_all(self.document_xml().as_bytes())?;

        Ok(zip.finish()?.into_inner())
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
