use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Service identity and version.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "ResumeForge API is running!",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /health/
/// Reads configuration only, so it answers even when the provider is unusable.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "groq_configured": state.config.groq_configured(),
        "model": state.config.model_name,
    }))
}
