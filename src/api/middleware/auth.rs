//! Token authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::errors::AppError;

/// Token-gating middleware.
///
/// Extracts the bearer token from the Authorization header, runs it
/// through the auth service, and injects the verified claims into the
/// request extensions. Any failure short-circuits with the uniform
/// unauthorized response before the handler is reached.
pub async fn require_token(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or(AppError::Unauthorized)?;

    let claims = state.auth_service.inspect(token)?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
