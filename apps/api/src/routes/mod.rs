pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::recommend::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML form
        .route("/", get(handlers::handle_index))
        .route("/recommend", post(handlers::handle_recommend_form))
        // JSON API
        .route("/api/v1/kits", get(handlers::handle_list_kits))
        .route(
            "/api/v1/recommendations",
            post(handlers::handle_recommend_json),
        )
        .fallback(not_found)
        .with_state(state)
}
