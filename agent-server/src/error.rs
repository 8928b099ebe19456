use thiserror::Error;

/// Errors surfaced by the extraction pipeline.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The extraction backend failed before producing any output.
    #[error("extractor error: {0}")]
    Extractor(String),

    /// The extractor produced JSON that does not match the required
    /// output schema (paper/equations/extraction_metadata).
    #[error("extractor output does not match the extraction schema: {0}")]
    Schema(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
