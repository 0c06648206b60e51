use axum::Json;
use crate::models::HealthResponse;
use tracing::debug;

pub const HEALTHY: &str = "healthy";

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse {
        status: HEALTHY.to_string(),
        message: "Backend is running successfully".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_check_reports_healthy() {
        let Json(body) = health_check().await;
        assert_eq!(body.status, "healthy");
        assert!(!body.message.is_empty());
    }
}
