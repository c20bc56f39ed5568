use auth::sanitizer;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::User;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// GET /api/data
///
/// Lists all registered users for the authenticated caller. Every
/// identity-bearing field is passed through the sanitizer before it leaves
/// the system.
pub async fn get_data(
    State(state): State<AppState>,
    Extension(current_user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<GetDataResponseData>, ApiError> {
    let users = state.user_service.list_users().await.map_err(ApiError::from)?;

    let users: Vec<SanitizedUserData> = users.iter().map(SanitizedUserData::from).collect();
    let count = users.len();

    Ok(ApiSuccess::new(
        StatusCode::OK,
        GetDataResponseData {
            current_user: sanitizer::sanitize(&current_user.username),
            users,
            count,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetDataResponseData {
    pub current_user: String,
    pub users: Vec<SanitizedUserData>,
    pub count: usize,
}

/// User record with markup stripped from free-text fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanitizedUserData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for SanitizedUserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: sanitizer::sanitize(user.username.as_str()),
            email: sanitizer::sanitize(user.email.as_str()),
            created_at: user.created_at,
        }
    }
}
