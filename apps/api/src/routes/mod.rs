pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze;
use crate::extraction::handlers::handle_extract;
use crate::state::AppState;

/// Headroom above the upload cap for multipart framing, so an oversized file
/// reaches the handler and gets the "File Too Large" body.
const BODY_LIMIT_HEADROOM: usize = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + BODY_LIMIT_HEADROOM;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(handle_analyze))
        .route("/api/v1/resume/extract", post(handle_extract))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
