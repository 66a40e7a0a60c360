pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::experts::handlers;
use crate::extract::MAX_UPLOAD_BYTES;
use crate::state::AppState;

/// Headroom for multipart framing and the text fields sent alongside the file.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health/", get(health::health_handler))
        .route("/experts/", get(handlers::handle_list_experts))
        .route("/prompt/", post(handlers::handle_prompt))
        .route(
            "/upload/",
            post(handlers::handle_upload)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES)),
        )
        .with_state(state)
}
