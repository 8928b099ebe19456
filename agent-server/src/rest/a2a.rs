use crate::ServerConfig;
use crate::a2a::{
    AgentCard, JsonRpcError, JsonRpcRequest, JsonRpcResponse, build_agent_card, extract_input,
    validate_output,
};
use crate::error::ServerError;
use axum::{extract::State, response::Json};
use serde_json::{Value, json};

/// Controller for the A2A endpoints. The card is built once at startup.
#[derive(Clone)]
pub struct A2aController {
    config: ServerConfig,
    agent_card: AgentCard,
}

impl A2aController {
    pub fn new(config: ServerConfig) -> Self {
        let agent_card = build_agent_card(&config);
        Self { config, agent_card }
    }
}

/// GET /.well-known/agent-card.json and /.well-known/agent.json
pub async fn get_agent_card(State(controller): State<A2aController>) -> Json<AgentCard> {
    Json(controller.agent_card.clone())
}

/// POST / - JSON-RPC endpoint.
///
/// Accepts a single request object or a batch array. Notifications
/// (requests without an id) produce no response object; a lone
/// notification answers with JSON `null`.
pub async fn handle_jsonrpc(
    State(controller): State<A2aController>,
    Json(payload): Json<Value>,
) -> Json<Value> {
    match payload {
        Value::Array(items) => {
            let mut responses = Vec::new();
            for item in items {
                if let Some(response) = handle_single(&controller, item).await {
                    responses.push(serde_json::to_value(response).unwrap_or_default());
                }
            }
            Json(Value::Array(responses))
        }
        single => match handle_single(&controller, single).await {
            Some(response) => Json(serde_json::to_value(response).unwrap_or_default()),
            None => Json(Value::Null),
        },
    }
}

async fn handle_single(controller: &A2aController, body: Value) -> Option<JsonRpcResponse> {
    let request: JsonRpcRequest = match serde_json::from_value(body) {
        Ok(request) => request,
        Err(e) => {
            return Some(JsonRpcResponse::error(
                None,
                JsonRpcError::invalid_request(format!("Malformed JSON-RPC request: {}", e)),
            ));
        }
    };

    if request.is_notification() {
        return None;
    }
    let id = request.id;

    let params = request.params.unwrap_or(Value::Null);
    let (text, meta) = extract_input(&params);
    let Some(text) = text else {
        return Some(JsonRpcResponse::error(
            id,
            JsonRpcError::invalid_params(
                "Missing input text in params (expected input.text or input_text).",
            )
            .with_data(json!({"method": request.method})),
        ));
    };

    tracing::debug!(method = %request.method, chunk_id = ?meta.chunk_id, "running extractor");

    let output = match controller.config.extractor.run(&text, &meta).await {
        Ok(output) => output,
        Err(e) => {
            return Some(JsonRpcResponse::error(
                id,
                JsonRpcError::internal_error_sanitized(
                    &e,
                    controller.config.security.expose_error_details,
                ),
            ));
        }
    };

    match validate_output(&output) {
        Ok(validated) => Some(JsonRpcResponse::success(
            id,
            serde_json::to_value(validated).unwrap_or_default(),
        )),
        Err(ServerError::Schema(e)) => Some(JsonRpcResponse::error(
            id,
            JsonRpcError::schema_mismatch(
                "Agent returned JSON that does not match the required schema (paper/equations/extraction_metadata).",
            )
            .with_data(json!({"validation_errors": e.to_string()})),
        )),
        Err(e) => Some(JsonRpcResponse::error(
            id,
            JsonRpcError::internal_error_sanitized(
                &e,
                controller.config.security.expose_error_details,
            ),
        )),
    }
}
