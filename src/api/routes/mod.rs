//! API routes module - organizes all route handlers.
//!
//! Entity routers are nested under /api; the welcome and health endpoints
//! live at the application root.

pub mod app_state;
pub mod crew;
pub mod crud;
pub mod error;
pub mod extract;
pub mod maintenance;
pub mod openapi;
pub mod vessels;
pub mod voyages;

use axum::{Router, response::Json, routing::get};
use serde_json::{Value, json};

// Re-export AppState from app_state module
pub use app_state::AppState;
use error::MessageBody;

/// Create the main API router combining all entity route modules
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/vessels", vessels::vessels_router())
        .nest("/crew", crew::crew_router())
        .nest("/voyages", voyages::voyages_router())
        .nest("/maintenance", maintenance::maintenance_router())
        // OpenAPI documentation endpoints
        .merge(openapi::openapi_router())
}

/// Create the full application router: the API nested under /api, welcome
/// and health endpoints at the root, state applied. Middleware layers are
/// added by the caller.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .nest("/api", create_api_router())
        .with_state(state)
}

async fn welcome() -> Json<MessageBody> {
    Json(MessageBody::new(
        "Welcome to Maritime Vessel Management System API",
    ))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
