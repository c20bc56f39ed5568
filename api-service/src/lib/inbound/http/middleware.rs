use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated identity through the request.
///
/// Inserted by [`authenticate`] once per request; downstream handlers read
/// it from request extensions instead of re-running any token check.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
}

/// Authentication gate for protected routes.
///
/// Extracts the bearer token, verifies it, and establishes the caller
/// identity for the remainder of request processing. All failures produce
/// the same generic 401 body: the distinction between a missing header, a
/// garbled header, a bad signature, and an expired token stays in the logs.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let subject = state.authenticator.extract_subject(token).map_err(|e| {
        tracing::warn!(error = %e, "Bearer token rejected");
        unauthorized()
    })?;

    req.extensions_mut()
        .insert(AuthenticatedUser { username: subject });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header on protected route");
            unauthorized()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        tracing::warn!("Authorization header is not valid UTF-8");
        unauthorized()
    })?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Authorization header is not a bearer token");
        unauthorized()
    })
}

fn unauthorized() -> Response {
    ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
}
