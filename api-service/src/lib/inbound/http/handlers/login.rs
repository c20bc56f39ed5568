use auth::AuthenticationError;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// POST /auth/login
///
/// Unknown username, invalid username syntax, and wrong password all map
/// to the same "Invalid credentials" response so callers cannot enumerate
/// accounts.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let username = Username::new(body.username).map_err(|_| invalid_credentials())?;

    let user = state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByUsername(_) => invalid_credentials(),
            _ => ApiError::from(e),
        })?;

    let result = state
        .authenticator
        .authenticate(&body.password, &user.password_hash, user.username.as_str())
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => invalid_credentials(),
            AuthenticationError::Password(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            AuthenticationError::Token(err) => {
                ApiError::InternalServerError(format!("Token issuance failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            token: result.access_token,
            username: user.username.to_string(),
        },
    ))
}

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized("Invalid credentials".to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub username: String,
}
