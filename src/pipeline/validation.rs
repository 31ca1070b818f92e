//! Validation engine for requests.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`Request`] and collects every diagnostic into a [`ValidationReport`].
//! It never short-circuits on the first error; the runner decides what to
//! do with the full report.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use pdf_toolkit::pipeline::validation::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let report = engine.validate(&request, Operation::Summarize);
//! if let Some(err) = report.errors().next() {
//!     eprintln!("{err}");
//! }
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::request::{Operation, Request};

// ─── Codes ──────────────────────────────────────────────────────────────────

/// Stable machine-readable category of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    MissingField,
    InvalidValue,
    UnknownField,
}

// ─── Issue ──────────────────────────────────────────────────────────────────

/// One problem found in a request: code, JSON pointer, message and hint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestIssue {
    pub code: ErrorCode,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl RequestIssue {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for RequestIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub issue: RequestIssue,
}

impl ValidationDiagnostic {
    pub fn error(issue: RequestIssue) -> Self {
        Self {
            severity: Severity::Error,
            issue,
        }
    }

    pub fn warning(issue: RequestIssue) -> Self {
        Self {
            severity: Severity::Warning,
            issue,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &RequestIssue> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.issue)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &RequestIssue> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.issue)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`Request`] for a resolved
/// [`Operation`] and returns zero or more diagnostics.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"required_fields"`).
    fn name(&self) -> &str;

    fn validate(&self, request: &Request, operation: Operation) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(RequiredFieldsRule));
        engine.add_rule(Box::new(CountRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Run all rules against `request` and return the collected report.
    pub fn validate(&self, request: &Request, operation: Operation) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(request, operation));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Operation-specific required fields ──────────────────────────────────

struct RequiredFieldsRule;

impl RequiredFieldsRule {
    fn is_present(request: &Request, field: &str) -> bool {
        match field {
            "pdf_content" => request.pdf_content.is_some(),
            "text" => request.text.is_some(),
            "question" => request.question.is_some(),
            "target_language" => request.target_language.is_some(),
            _ => true,
        }
    }
}

impl ValidationRule for RequiredFieldsRule {
    fn name(&self) -> &str {
        "required_fields"
    }

    fn validate(&self, request: &Request, operation: Operation) -> Vec<ValidationDiagnostic> {
        operation
            .required_fields()
            .iter()
            .filter(|field| !Self::is_present(request, field))
            .map(|field| {
                ValidationDiagnostic::error(
                    RequestIssue::new(
                        ErrorCode::MissingField,
                        format!("/{field}"),
                        format!(
                            "missing required field \"{field}\" for operation {}",
                            operation.as_str()
                        ),
                    )
                    .with_hint(format!("Add \"{field}\" to the request")),
                )
            })
            .collect()
    }
}

// ─── 2. A zero keyword count yields an empty list ───────────────────────────

struct CountRule;

impl ValidationRule for CountRule {
    fn name(&self) -> &str {
        "count"
    }

    fn validate(&self, request: &Request, operation: Operation) -> Vec<ValidationDiagnostic> {
        if operation == Operation::ExtractKeywords && request.count == Some(0) {
            vec![ValidationDiagnostic::warning(
                RequestIssue::new(
                    ErrorCode::InvalidValue,
                    "/count",
                    "count is 0; no keywords will be returned",
                )
                .with_hint("Omit count to use the default"),
            )]
        } else {
            vec![]
        }
    }
}

// ─── 3. Unknown fields are reported, never rejected ─────────────────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    fn check_unknowns(unknowns: &HashMap<String, serde_json::Value>) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<&String> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                ValidationDiagnostic::warning(
                    RequestIssue::new(
                        ErrorCode::UnknownField,
                        format!("/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, request: &Request, _operation: Operation) -> Vec<ValidationDiagnostic> {
        Self::check_unknowns(&request.unknown_fields)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> Request {
        serde_json::from_str(json).unwrap()
    }

    fn engine() -> ValidationEngine {
        ValidationEngine::with_defaults()
    }

    #[test]
    fn test_complete_request_is_clean() {
        let req = request(r#"{ "operation": "summarize", "text": "Hello." }"#);
        let report = engine().validate(&req, Operation::Summarize);
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn test_missing_text_is_an_error() {
        let req = request(r#"{ "operation": "rewrite" }"#);
        let report = engine().validate(&req, Operation::Rewrite);
        assert!(report.has_errors());

        let err = report.errors().next().unwrap();
        assert_eq!(err.code, ErrorCode::MissingField);
        assert_eq!(err.path, "/text");
        assert_eq!(
            err.to_string(),
            "missing required field \"text\" for operation rewrite"
        );
    }

    #[test]
    fn test_chat_reports_both_missing_fields() {
        let req = request(r#"{ "operation": "chat" }"#);
        let report = engine().validate(&req, Operation::Chat);
        let paths: Vec<&str> = report.errors().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/text", "/question"]);
    }

    #[test]
    fn test_pdf_operations_need_pdf_content() {
        let req = request(r#"{ "text": "not a pdf" }"#);
        for op in [
            Operation::ExtractText,
            Operation::CompressPdf,
            Operation::PdfToDocx,
        ] {
            let report = engine().validate(&req, op);
            assert_eq!(report.errors().next().unwrap().path, "/pdf_content");
        }
    }

    #[test]
    fn test_translate_needs_target_language() {
        let req = request(r#"{ "text": "Hola" }"#);
        let report = engine().validate(&req, Operation::Translate);
        assert_eq!(report.errors().count(), 1);
        assert_eq!(report.errors().next().unwrap().path, "/target_language");
    }

    #[test]
    fn test_empty_text_counts_as_present() {
        let req = request(r#"{ "text": "" }"#);
        assert!(engine().validate(&req, Operation::Summarize).is_valid());
    }

    #[test]
    fn test_zero_count_is_a_warning() {
        let req = request(r#"{ "text": "a b c", "count": 0 }"#);
        let report = engine().validate(&req, Operation::ExtractKeywords);
        assert!(report.is_valid());
        assert_eq!(report.warnings().next().unwrap().code, ErrorCode::InvalidValue);
    }

    #[test]
    fn test_zero_count_ignored_for_other_operations() {
        let req = request(r#"{ "text": "a b c", "count": 0 }"#);
        assert!(engine().validate(&req, Operation::Summarize).is_empty());
    }

    #[test]
    fn test_unknown_fields_are_sorted_warnings() {
        let req = request(r#"{ "text": "x", "zeta": 1, "alpha": true }"#);
        let report = engine().validate(&req, Operation::Summarize);
        assert!(report.is_valid());
        let paths: Vec<&str> = report.warnings().map(|w| w.path.as_str()).collect();
        assert_eq!(paths, vec!["/alpha", "/zeta"]);
    }

    #[test]
    fn test_custom_rule() {
        struct AlwaysWarnRule;
        impl ValidationRule for AlwaysWarnRule {
            fn name(&self) -> &str {
                "always_warn"
            }
            fn validate(&self, _request: &Request, _op: Operation) -> Vec<ValidationDiagnostic> {
                vec![ValidationDiagnostic::warning(RequestIssue::new(
                    ErrorCode::InvalidValue,
                    "",
                    "custom warning",
                ))]
            }
        }

        let mut engine = ValidationEngine::new();
        engine.add_rule(Box::new(AlwaysWarnRule));
        let report = engine.validate(&Request::default(), Operation::Chat);
        assert_eq!(report.len(), 1);
        assert!(report.is_valid());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let req = request(r#"{ "operation": "summarize" }"#);
        let report = engine().validate(&req, Operation::Summarize);
        let json = serde_json::to_value(&report).unwrap();

        let diag = &json["diagnostics"][0];
        assert_eq!(diag["severity"], "error");
        assert_eq!(diag["code"], "missing_field");
        assert_eq!(diag["path"], "/text");
    }
}
