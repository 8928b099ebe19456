use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 Request.
///
/// The server is deliberately tolerant: `jsonrpc` and `method` may be
/// absent, and any method name is accepted as long as the params carry
/// input text. A request without an `id` is a notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
}

impl JsonRpcRequest {
    /// Notifications (no id, or an explicit null id) get no response.
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// JSON-RPC 2.0 Response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    pub id: Option<Value>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self { jsonrpc: "2.0".to_string(), result: Some(result), error: None, id }
    }

    pub fn error(id: Option<Value>, error: JsonRpcError) -> Self {
        Self { jsonrpc: "2.0".to_string(), result: None, error: Some(error), id }
    }
}

/// JSON-RPC 2.0 Error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self { code: -32700, message: message.into(), data: None }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self { code: -32600, message: message.into(), data: None }
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self { code: -32602, message: message.into(), data: None }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self { code: -32603, message: message.into(), data: None }
    }

    /// Application error for extractor output failing schema validation.
    pub fn schema_mismatch(message: impl Into<String>) -> Self {
        Self { code: -32000, message: message.into(), data: None }
    }

    /// Attach structured detail to the error.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Create an internal error with sanitized message for production.
    /// Logs the detailed error but returns a generic message to the client.
    pub fn internal_error_sanitized(error: &dyn std::fmt::Display, expose_details: bool) -> Self {
        if expose_details {
            Self::internal_error(error.to_string())
        } else {
            tracing::error!(error = %error, "Internal server error");
            Self::internal_error("Internal server error")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jsonrpc_request_parse() {
        let json = r#"{"jsonrpc":"2.0","method":"message/send","params":{},"id":1}"#;
        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.method, "message/send");
        assert_eq!(req.id, Some(Value::Number(1.into())));
        assert!(!req.is_notification());
    }

    #[test]
    fn test_jsonrpc_request_tolerates_missing_fields() {
        let req: JsonRpcRequest = serde_json::from_str(r#"{"params":{"text":"x"},"id":7}"#).unwrap();
        assert!(req.jsonrpc.is_none());
        assert_eq!(req.method, "");
        assert!(!req.is_notification());
    }

    #[test]
    fn test_jsonrpc_notification() {
        let req: JsonRpcRequest = serde_json::from_str(r#"{"method":"notify"}"#).unwrap();
        assert!(req.is_notification());

        // An explicit null id also counts as a notification.
        let req: JsonRpcRequest = serde_json::from_str(r#"{"method":"notify","id":null}"#).unwrap();
        assert!(req.is_notification());
    }

    #[test]
    fn test_jsonrpc_response_success() {
        let resp =
            JsonRpcResponse::success(Some(Value::Number(1.into())), Value::String("ok".into()));
        assert!(resp.result.is_some());
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_jsonrpc_response_error() {
        let resp = JsonRpcResponse::error(
            Some(Value::Number(1.into())),
            JsonRpcError::invalid_params("missing text"),
        );
        assert!(resp.result.is_none());
        assert_eq!(resp.error.unwrap().code, -32602);
    }

    #[test]
    fn test_schema_mismatch_with_data() {
        let err = JsonRpcError::schema_mismatch("bad output")
            .with_data(serde_json::json!({"validation_errors": "missing field"}));
        assert_eq!(err.code, -32000);
        assert!(err.data.is_some());
    }
}
