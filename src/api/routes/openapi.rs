//! OpenAPI specification endpoints.
//!
//! Provides the endpoint that serves the OpenAPI spec as JSON.

use axum::{Router, response::Json, routing::get};
use utoipa::OpenApi;

use super::super::openapi::ApiDoc;
use super::app_state::AppState;

/// Create the OpenAPI router
pub fn openapi_router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(serve_openapi_json))
}

/// GET /api/openapi.json - Serve the OpenAPI specification as JSON
#[utoipa::path(
    get,
    path = "/api/openapi.json",
    tag = "OpenAPI",
    responses(
        (status = 200, description = "OpenAPI specification", body = Object)
    )
)]
pub async fn serve_openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
