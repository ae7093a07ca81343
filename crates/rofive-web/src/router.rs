//! Axum router — maps all URL paths to handlers.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

use crate::handlers::{
    batch::{api_batch, batch_submit},
    page::index,
    single::{api_evaluate, evaluate_submit},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Page
        .route("/",         get(index))
        .route("/evaluate", post(evaluate_submit))
        .route("/batch",    post(batch_submit))

        // API endpoints
        .route("/api/evaluate", get(api_evaluate))
        .route("/api/batch",    post(api_batch))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
