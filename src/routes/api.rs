use crate::handlers::{get_message, health_check};
use axum::{routing::get, Router};

/// Create API routes
pub fn create_api_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/message", get(get_message))
}
