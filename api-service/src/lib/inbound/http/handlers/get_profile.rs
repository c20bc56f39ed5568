use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::get_data::SanitizedUserData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// GET /api/profile
///
/// Returns the authenticated caller's own record, sanitized. The identity
/// comes from the gate's request-scoped context; a subject that no longer
/// resolves to a user is treated as an invalid token.
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(current_user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<SanitizedUserData>, ApiError> {
    let username = Username::new(current_user.username).map_err(|_| stale_token())?;

    let user = state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByUsername(_) => stale_token(),
            _ => ApiError::from(e),
        })?;

    Ok(ApiSuccess::new(StatusCode::OK, (&user).into()))
}

fn stale_token() -> ApiError {
    ApiError::Unauthorized("Invalid or expired token".to_string())
}
