//! Wire schema for the white-agent extraction output.
//!
//! Top-level keys are `paper`, `equations`, and `extraction_metadata`;
//! all of them are required. Every object is open to extra fields so a
//! real extractor can enrich the output without schema changes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ServerError;

/// Publication year as reported; papers cite it as either a number or a
/// string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    pub doi: Option<String>,
    pub title: Option<String>,
    pub year: Option<Year>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One extracted equation. `latex` and `model_performance` are the
/// fields the benchmark grades on; both may be null when the paper does
/// not report them explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equation {
    pub latex: Option<String>,
    /// Reported metrics (e.g., R2, RMSE); null if not reported.
    pub model_performance: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    pub task_id: Option<String>,
    pub input_doi: Option<String>,
    pub schema_name: Option<String>,
    pub schema_version: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionOutput {
    pub paper: Paper,
    pub equations: Vec<Equation>,
    pub extraction_metadata: ExtractionMetadata,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Validate raw extractor output against the required schema.
pub fn validate_output(value: &Value) -> Result<ExtractionOutput, ServerError> {
    Ok(serde_json::from_value(value.clone())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_minimal_output() {
        let value = json!({
            "paper": {"doi": null, "title": null, "year": null},
            "equations": [],
            "extraction_metadata": {}
        });
        let output = validate_output(&value).unwrap();
        assert!(output.equations.is_empty());
        assert!(output.paper.doi.is_none());
    }

    #[test]
    fn test_validate_rejects_null() {
        assert!(validate_output(&Value::Null).is_err());
    }

    #[test]
    fn test_validate_rejects_missing_top_level_key() {
        let value = json!({
            "paper": {},
            "equations": []
        });
        assert!(validate_output(&value).is_err());
    }

    #[test]
    fn test_year_accepts_number_or_string() {
        let value = json!({
            "paper": {"year": 2021},
            "equations": [],
            "extraction_metadata": {}
        });
        assert_eq!(validate_output(&value).unwrap().paper.year, Some(Year::Number(2021)));

        let value = json!({
            "paper": {"year": "2021a"},
            "equations": [],
            "extraction_metadata": {}
        });
        assert_eq!(
            validate_output(&value).unwrap().paper.year,
            Some(Year::Text("2021a".to_string()))
        );
    }

    #[test]
    fn test_extra_fields_survive_round_trip() {
        let value = json!({
            "paper": {"journal": "J. Dairy Sci."},
            "equations": [{
                "latex": "y = a + bx",
                "model_performance": {"r2": 0.92},
                "notes": "lactation curve"
            }],
            "extraction_metadata": {"task_id": "t-9"},
            "confidence": 0.8
        });

        let output = validate_output(&value).unwrap();
        let round_tripped = serde_json::to_value(&output).unwrap();
        assert_eq!(round_tripped["paper"]["journal"], "J. Dairy Sci.");
        assert_eq!(round_tripped["equations"][0]["notes"], "lactation curve");
        assert_eq!(round_tripped["confidence"], 0.8);
        assert_eq!(round_tripped["equations"][0]["model_performance"]["r2"], 0.92);
    }
}
