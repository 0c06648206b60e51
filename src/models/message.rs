use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Greeting shown by the frontend once it reaches the backend
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
