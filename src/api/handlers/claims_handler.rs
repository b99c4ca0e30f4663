//! Token contents handlers.

use axum::{response::Json, routing::get, Extension, Router};

use crate::api::AppState;
use crate::domain::ClaimSet;
use crate::errors::AppResult;

/// Create token contents routes.
///
/// These routes expect the `require_token` middleware to run first; the
/// verified claims arrive through the request extensions.
pub fn claims_routes() -> Router<AppState> {
    Router::new().route("/", get(contents))
}

/// Return the claims carried by the presented token
#[utoipa::path(
    get,
    path = "/contents",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Verified token claims"),
        (status = 401, description = "Missing, invalid, or expired token")
    )
)]
pub async fn contents(Extension(claims): Extension<ClaimSet>) -> AppResult<Json<ClaimSet>> {
    Ok(Json(claims))
}
