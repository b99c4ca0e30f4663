//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::TokenResponse;

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AuthRequest {
    /// Identifier presented by the client (e.g. an email address)
    #[validate(length(min = 1, message = "identifier is required"))]
    #[schema(example = "user@example.com")]
    pub identifier: String,
    /// Proof of identity (e.g. a password)
    #[validate(length(min = 1, message = "proof is required"))]
    #[schema(example = "SecurePass123!")]
    pub proof: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/", post(login))
}

/// Exchange a credential pair for a signed token
#[utoipa::path(
    post,
    path = "/auth",
    tag = "Authentication",
    request_body = AuthRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Missing or malformed credential input"),
        (status = 401, description = "Credential rejected"),
        (status = 503, description = "Credential verifier unavailable")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AuthRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .auth_service
        .login(payload.identifier, payload.proof)
        .await?;

    Ok(Json(token))
}
