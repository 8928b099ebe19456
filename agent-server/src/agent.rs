//! The extraction seam.
//!
//! The server validates whatever the backend returns against the output
//! schema, so implementations hand back raw JSON rather than typed
//! structs; a misbehaving backend surfaces as a schema-mismatch error to
//! the client instead of a panic.

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::a2a::params::RequestMeta;
use crate::error::Result;

/// Extraction backend answering one paper-chunk request.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Run the extraction over the chunk text, returning the output as
    /// raw JSON in the white-agent schema.
    async fn run(&self, text: &str, meta: &RequestMeta) -> Result<Value>;
}

/// Built-in stub selected with `--use-placeholder-agent`.
///
/// Always returns a schema-valid structure echoing the request
/// metadata, so controller smoke tests pass without a real extractor.
pub struct PlaceholderExtractor;

#[async_trait]
impl Extractor for PlaceholderExtractor {
    async fn run(&self, _text: &str, meta: &RequestMeta) -> Result<Value> {
        Ok(json!({
            "paper": {
                "doi": meta.input_doi.clone(),
                "title": null,
                "year": null,
            },
            "equations": [{
                "latex": null,
                "model_performance": null,
                "notes": "placeholder agent output; swap in a real extractor to produce latex and performance metrics",
            }],
            "extraction_metadata": {
                "task_id": meta.task_id.clone(),
                "input_doi": meta.input_doi.clone(),
                "schema_name": meta.schema_name.clone(),
                "schema_version": meta.schema_version.clone(),
            },
        }))
    }
}

/// The unplugged extractor slot used when no backend is configured.
///
/// Returns `null`, which fails schema validation and reports the agent
/// as unconfigured to the caller.
pub struct UnconfiguredExtractor;

#[async_trait]
impl Extractor for UnconfiguredExtractor {
    async fn run(&self, _text: &str, _meta: &RequestMeta) -> Result<Value> {
        Ok(Value::Null)
    }
}
