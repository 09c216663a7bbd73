//! HTTP routes for the web interface
//!
//! Chat and status endpoints never answer with a 5xx for backend
//! failures; the session degrades to demo replies instead and the routes
//! report that state truthfully.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};

use pup_core::types::{ChatRequest, ChatResponse};
use pup_sdk::{GatewaySession, GatewayStatus};

/// Build the web application (shared between production startup and tests).
pub fn build_app(session: Arc<GatewaySession>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/status", get(status_handler))
        .route("/api/capabilities", get(capabilities_handler))
        .route("/api/agents", get(agents_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(session)
}

async fn root_handler(State(session): State<Arc<GatewaySession>>) -> Json<Value> {
    let flags = session.connection_flags().await;
    Json(json!({
        "name": "Alberto the Code Puppy",
        "version": pup_core::VERSION,
        "connected": flags.connected,
        "demo_mode": flags.demo_mode,
    }))
}

async fn chat_handler(
    State(session): State<Arc<GatewaySession>>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    Json(session.chat(request).await)
}

async fn status_handler(State(session): State<Arc<GatewaySession>>) -> Json<GatewayStatus> {
    Json(session.status().await)
}

async fn capabilities_handler(State(session): State<Arc<GatewaySession>>) -> Json<Vec<String>> {
    Json(session.capabilities().await)
}

async fn agents_handler(State(session): State<Arc<GatewaySession>>) -> Json<Vec<String>> {
    Json(session.agents().await)
}

async fn health_handler(State(session): State<Arc<GatewaySession>>) -> Json<Value> {
    Json(json!({ "status": session.health().await.as_str() }))
}
