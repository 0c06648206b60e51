use axum::Json;
use crate::models::MessageResponse;
use tracing::debug;

pub const INTEGRATION_MESSAGE: &str = "You've successfully integrated the backend!";

/// Static message endpoint
pub async fn get_message() -> Json<MessageResponse> {
    debug!("Message requested");
    Json(MessageResponse {
        message: INTEGRATION_MESSAGE.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn message_is_exact() {
        let Json(body) = get_message().await;
        assert_eq!(body.message, "You've successfully integrated the backend!");
    }
}
