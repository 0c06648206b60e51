mod api;
mod cors;

pub use api::create_api_routes;
pub use cors::cors_layer;

use crate::{config::Config, docs::ApiDoc};
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Assemble the full application router
pub fn create_app(config: &Config) -> Router {
    Router::new()
        // Mount API routes
        .nest("/api", create_api_routes())
        // Mount Swagger UI
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}
