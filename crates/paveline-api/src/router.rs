use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))
        // Estimate requests
        .route("/api/estimates", post(handlers::submit_estimate))
        // Core operations
        .route("/api/measurements", post(handlers::measure_boundary))
        .route("/api/pricing", post(handlers::price_area))
        .route("/api/validation/area", post(handlers::validate_area))
        .route("/api/validation/perimeter", post(handlers::validate_perimeter))
        .route("/api/validation/form", post(handlers::validate_form))
        .route("/api/tools/recommend", post(handlers::recommend_tool))
        .with_state(state)
}
