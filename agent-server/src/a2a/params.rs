//! Tolerant mining of JSON-RPC params for the paper chunk text.
//!
//! A2A clients disagree on param shapes, so the server accepts any
//! method name and looks for text in the common places.

use serde_json::Value;

/// Request metadata carried through to the extraction output for
/// provenance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMeta {
    pub task_id: Option<String>,
    pub input_doi: Option<String>,
    pub schema_name: Option<String>,
    pub schema_version: Option<String>,
    pub chunk_id: Option<String>,
    pub content_type: Option<String>,
}

/// Direct param fields checked after `input.text`.
const TEXT_FALLBACK_KEYS: &[&str] = &["input_text", "text", "chunk_text", "content"];

fn nonblank(value: &Value) -> Option<String> {
    value.as_str().filter(|s| !s.trim().is_empty()).map(str::to_string)
}

fn string_field(params: &Value, key: &str) -> Option<String> {
    params.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Find the chunk text and useful metadata in the params.
///
/// Returns `(text, meta)`; `text` is `None` when no non-blank input was
/// found in any supported shape.
pub fn extract_input(params: &Value) -> (Option<String>, RequestMeta) {
    let mut meta = RequestMeta::default();

    if !params.is_object() {
        return (None, meta);
    }

    meta.task_id = string_field(params, "task_id");

    if let Some(schema) = params.get("schema").filter(|s| s.is_object()) {
        meta.schema_name = string_field(schema, "name");
        meta.schema_version = string_field(schema, "version");
    }

    // Paper info (optional but useful for provenance)
    if let Some(paper) = params.get("paper").filter(|p| p.is_object()) {
        meta.input_doi = string_field(paper, "doi");
    }

    if let Some(input) = params.get("input").filter(|i| i.is_object()) {
        meta.chunk_id = string_field(input, "chunk_id");
        meta.content_type = string_field(input, "content_type");
        if let Some(text) = input.get("text").and_then(nonblank) {
            return (Some(text), meta);
        }
    }

    for key in TEXT_FALLBACK_KEYS {
        if let Some(text) = params.get(*key).and_then(nonblank) {
            return (Some(text), meta);
        }
    }

    (None, meta)
}
