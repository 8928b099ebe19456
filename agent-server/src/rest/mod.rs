pub mod a2a;

pub use a2a::A2aController;

use crate::ServerConfig;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Method, header},
    response::Json,
    routing::{get, post},
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Create the agent server application.
///
/// Routes:
/// - `GET /.well-known/agent-card.json` — Agent Card (AgentBeats
///   controller checks this path)
/// - `GET /.well-known/agent.json` — same card (common A2A discovery)
/// - `GET /health`
/// - `POST /` — JSON-RPC endpoint (single and batch)
pub fn create_app(config: ServerConfig) -> Router {
    let request_timeout = config.security.request_timeout;
    let max_body_size = config.security.max_body_size;
    let controller = A2aController::new(config);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(AllowOrigin::any());

    Router::new()
        .route("/.well-known/agent-card.json", get(a2a::get_agent_card))
        .route("/.well-known/agent.json", get(a2a::get_agent_card))
        .route("/health", get(health_check))
        .route("/", post(a2a::handle_jsonrpc))
        .with_state(controller)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(request_timeout))
                .layer(DefaultBodyLimit::max(max_body_size))
                .layer(cors),
        )
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({"ok": true}))
}
