mod common;

use std::io::{Cursor, Read};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::{process, sample_pdf};

const ARTICLE: &str = "Solar panels convert sunlight into electricity. \
    Panels on roofs reduce household electricity bills. \
    The weather was pleasant yesterday. \
    Modern solar panels reach high efficiency. \
    My cat sleeps all day. \
    Electricity from solar panels can be stored in batteries. \
    Batteries smooth out supply at night. \
    Some people enjoy long walks. \
    Grid operators buy surplus electricity from solar owners. \
    Coffee tastes good in the morning.";

#[test]
fn unknown_operation_is_rejected() {
    assert_eq!(
        process(&json!({ "operation": "foo" })),
        json!({ "success": false, "error": "Unknown operation" })
    );
}

#[test]
fn summarize_short_text_is_unchanged() {
    let text = "First point. Second point.";
    assert_eq!(
        process(&json!({ "operation": "summarize", "text": text, "length": "brief" })),
        json!({ "success": true, "summary": text, "length": "brief" })
    );
}

#[test]
fn summarize_brief_pet_example() {
    let text = "Cats are great. Dogs are great too. Birds can fly. Fish swim in water. \
                Great pets include cats and dogs.";
    assert_eq!(
        process(&json!({ "operation": "summarize", "text": text, "length": "brief" })),
        json!({
            "success": true,
            "summary": "Cats are great. Dogs are great too. Great pets include cats and dogs.",
            "length": "brief"
        })
    );
}

#[test]
fn summarize_length_is_case_sensitive() {
    let text = "A. B. C. D.";
    let out = process(&json!({ "operation": "summarize", "text": text, "length": "Brief" }));
    assert_eq!(out["summary"], text);
    assert_eq!(out["length"], "Brief");
}

#[test]
fn keywords_keep_common_content_words() {
    let out = process(&json!({
        "operation": "extract_keywords",
        "text": "The new system uses important data. The world values information."
    }));
    assert_eq!(
        out["keywords"],
        json!(["new", "system", "uses", "important", "data", "world", "values", "information"])
    );
}

#[test]
fn summarize_keeps_topical_sentences_in_order() {
    let out = process(&json!({ "operation": "summarize", "text": ARTICLE, "length": "brief" }));
    assert_eq!(out["success"], true);

    let summary = out["summary"].as_str().unwrap();
    let kept: Vec<&str> = ARTICLE
        .split_inclusive(". ")
        .map(str::trim)
        .filter(|s| summary.contains(s.trim_end_matches('.')))
        .collect();
    assert_eq!(kept.len(), 3);
    assert!(!summary.contains("cat"));
    assert!(!summary.contains("Coffee"));
}

#[test]
fn keywords_are_ranked_by_frequency() {
    let out = process(&json!({ "operation": "extract_keywords", "text": ARTICLE, "count": 3 }));
    assert_eq!(out["count"], 3);
    let keywords: Vec<&str> = out["keywords"]
        .as_array()
        .unwrap()
        .iter()
        .map(|k| k.as_str().unwrap())
        .collect();
    assert_eq!(keywords[..2], ["solar", "panels"]);
}

#[test]
fn keywords_default_count() {
    let out = process(&json!({ "operation": "extract_keywords", "text": ARTICLE }));
    assert_eq!(out["count"], 10);
}

#[test]
fn formal_rewrite() {
    assert_eq!(
        process(&json!({ "operation": "rewrite", "text": "I don't know.", "tone": "formal" })),
        json!({ "success": true, "rewritten_text": "I do not know.", "tone": "formal" })
    );
}

#[test]
fn capitalized_tone_leaves_text() {
    let out = process(&json!({ "operation": "rewrite", "text": "I don't know.", "tone": "Formal" }));
    assert_eq!(out["rewritten_text"], "I don't know.");
}

#[test]
fn unknown_tone_leaves_text() {
    let out = process(&json!({ "operation": "rewrite", "text": "I don't know.", "tone": "pirate" }));
    assert_eq!(out["rewritten_text"], "I don't know.");
    assert_eq!(out["tone"], "pirate");
}

#[test]
fn chat_quotes_matching_sentences() {
    let out = process(&json!({
        "operation": "chat",
        "text": ARTICLE,
        "question": "What about batteries?"
    }));
    let answer = out["answer"].as_str().unwrap();
    assert!(answer.starts_with("Based on the document content, here's what I found: "));
    assert!(answer.contains("Batteries smooth out supply at night."));
}

#[test]
fn translate_names_the_target() {
    let out = process(&json!({
        "operation": "translate",
        "text": "The cat is on the table and the dog is in the garden.",
        "target_language": "fr"
    }));
    assert_eq!(out["success"], true);
    assert_eq!(out["source_language"], "en");
    assert_eq!(out["target_language"], "fr");
    assert!(out["translated_text"].as_str().unwrap().contains("The cat is on the table"));
}

#[test]
fn missing_field_is_reported() {
    assert_eq!(
        process(&json!({ "operation": "extract_text" })),
        json!({
            "success": false,
            "error": "missing required field \"pdf_content\" for operation extract_text"
        })
    );
}

#[test]
fn extract_text_reads_every_page() {
    let pdf = STANDARD.encode(sample_pdf(&["Chapter one", "Chapter two"]));
    let out = process(&json!({ "operation": "extract_text", "pdf_content": pdf }));
    let text = out["text"].as_str().unwrap();
    assert!(text.find("Chapter one").unwrap() < text.find("Chapter two").unwrap());
}

#[test]
fn compressed_pdf_still_has_text() {
    let pdf = STANDARD.encode(sample_pdf(&["Keep this sentence"]));
    let out = process(&json!({
        "operation": "compress_pdf",
        "pdf_content": pdf,
        "compression_level": "high"
    }));
    assert_eq!(out["compression_level"], "high");

    let compressed = out["pdf"].as_str().unwrap();
    let again = process(&json!({ "operation": "extract_text", "pdf_content": compressed }));
    assert!(again["text"].as_str().unwrap().contains("Keep this sentence"));
}

#[test]
fn docx_contains_page_text() {
    let pdf = STANDARD.encode(sample_pdf(&["Hello docx"]));
    let out = process(&json!({ "operation": "pdf_to_docx", "pdf_content": pdf }));
    assert_eq!(out["filename"], "converted_document.docx");

    let bytes = STANDARD.decode(out["docx"].as_str().unwrap()).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    assert!(xml.contains("Hello docx"));
}

#[test]
fn corrupt_pdf_is_a_failure() {
    let out = process(&json!({
        "operation": "extract_text",
        "pdf_content": STANDARD.encode(b"not a pdf at all")
    }));
    assert_eq!(out["success"], false);
    assert!(out["error"].as_str().unwrap().starts_with("failed to process PDF"));
}
