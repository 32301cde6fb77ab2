pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API — pure keyword gap scoring, no model call
        .route("/api/v1/analysis", post(analysis::handle_analyze))
        // Generation API — hosted-model operations
        .route("/api/v1/optimize", post(generation::handle_optimize))
        .route("/api/v1/cover-letter", post(generation::handle_cover_letter))
        .route("/api/v1/improvements", post(generation::handle_improvements))
        .route("/api/v1/generate", post(generation::handle_generate))
        .with_state(state)
}
