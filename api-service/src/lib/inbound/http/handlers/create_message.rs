use auth::sanitizer;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

/// POST /api/message
///
/// Accepts free text and returns two neutralized renditions: the
/// structurally cleaned one and the raw-but-escaped one. The raw input is
/// never echoed back.
pub async fn create_message(
    Extension(current_user): Extension<AuthenticatedUser>,
    Json(body): Json<CreateMessageRequest>,
) -> Result<ApiSuccess<CreateMessageResponseData>, ApiError> {
    if body.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Message cannot be empty".to_string()));
    }

    Ok(ApiSuccess::new(
        StatusCode::OK,
        CreateMessageResponseData {
            user: sanitizer::sanitize(&current_user.username),
            sanitized_message: sanitizer::sanitize(&body.message),
            escaped_message: sanitizer::escape_html(&body.message),
            status: "Message processed successfully".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateMessageRequest {
    message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateMessageResponseData {
    pub user: String,
    pub sanitized_message: String,
    pub escaped_message: String,
    pub status: String,
}
