//! Application route configuration.

use axum::{middleware, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{auth_routes, claims_routes};
use super::middleware::require_token;
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness probe
        .route("/", get(root))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public authentication route
        .nest("/auth", auth_routes())
        // Token contents, gated by explicit verification middleware
        .nest(
            "/contents",
            claims_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_token,
            )),
        )
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness response
#[derive(Serialize)]
struct LivenessResponse {
    status: &'static str,
}

/// Liveness probe; touches no service state
async fn root() -> Json<LivenessResponse> {
    Json(LivenessResponse { status: "ok" })
}
