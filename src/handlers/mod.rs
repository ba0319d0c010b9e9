pub mod feedback;
pub mod upload;

use axum::routing::{get, post};
use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/post-data",
            post(upload::upload_multipart).put(upload::upload_json),
        )
        .route("/api/get-feedback", get(feedback::get_feedback))
        // Health check
        .route("/health", get(health))
        .fallback(fallback)
}

async fn health() -> &'static str {
    "OK"
}

async fn fallback() -> AppError {
    AppError::NotFound("Not found".to_string())
}
