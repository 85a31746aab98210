//! Vessel routes.
//! CRUD plus the status filter and the wholesale location update.

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{delete, get, patch, post, put},
};
use serde::Deserialize;

use super::app_state::AppState;
use super::crud;
use super::error::{ApiError, MessageBody};
use super::extract::{AppJson, AppPath};
use crate::models::{CreateVesselRequest, Location, UpdateVesselRequest, Vessel, VesselStatus};

/// Create the vessels router
pub fn vessels_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vessels))
        .route("/", post(create_vessel))
        .route("/status/{status}", get(vessels_by_status))
        .route("/{id}", get(get_vessel))
        .route("/{id}", put(update_vessel))
        .route("/{id}", delete(delete_vessel))
        .route("/{id}/location", patch(update_vessel_location))
}

/// Path parameters for single-vessel routes
#[derive(Deserialize)]
struct VesselIdPath {
    id: String,
}

/// Path parameters for the status filter
#[derive(Deserialize)]
struct VesselStatusPath {
    status: VesselStatus,
}

/// GET /api/vessels - List all vessels
#[utoipa::path(
    get,
    path = "/api/vessels",
    tag = "Vessels",
    responses(
        (status = 200, description = "Vessels retrieved successfully", body = Vec<Vessel>),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn list_vessels(State(state): State<AppState>) -> Result<Json<Vec<Vessel>>, ApiError> {
    let vessels = crud::list(state.store.vessels()).await?;
    Ok(Json(vessels))
}

/// POST /api/vessels - Register a new vessel
#[utoipa::path(
    post,
    path = "/api/vessels",
    tag = "Vessels",
    request_body = CreateVesselRequest,
    responses(
        (status = 201, description = "Vessel created successfully", body = Vessel),
        (status = 400, description = "Invalid payload or duplicate vessel id", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn create_vessel(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateVesselRequest>,
) -> Result<(StatusCode, Json<Vessel>), ApiError> {
    let vessel = crud::create(state.store.vessels(), request).await?;
    Ok((StatusCode::CREATED, Json(vessel)))
}

/// GET /api/vessels/status/{status} - List vessels with the given status
#[utoipa::path(
    get,
    path = "/api/vessels/status/{status}",
    tag = "Vessels",
    params(
        ("status" = String, Path, description = "Vessel status, e.g. Active or In Transit")
    ),
    responses(
        (status = 200, description = "Vessels retrieved successfully", body = Vec<Vessel>),
        (status = 400, description = "Unknown status value", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn vessels_by_status(
    State(state): State<AppState>,
    AppPath(path): AppPath<VesselStatusPath>,
) -> Result<Json<Vec<Vessel>>, ApiError> {
    let vessels = state.store.vessels_by_status(path.status).await?;
    Ok(Json(vessels))
}

/// GET /api/vessels/{id} - Get one vessel by business id
#[utoipa::path(
    get,
    path = "/api/vessels/{id}",
    tag = "Vessels",
    params(
        ("id" = String, Path, description = "Vessel business id")
    ),
    responses(
        (status = 200, description = "Vessel retrieved successfully", body = Vessel),
        (status = 404, description = "Vessel not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn get_vessel(
    State(state): State<AppState>,
    AppPath(path): AppPath<VesselIdPath>,
) -> Result<Json<Vessel>, ApiError> {
    let vessel = crud::fetch(state.store.vessels(), &path.id).await?;
    Ok(Json(vessel))
}

/// PUT /api/vessels/{id} - Update a vessel
#[utoipa::path(
    put,
    path = "/api/vessels/{id}",
    tag = "Vessels",
    params(
        ("id" = String, Path, description = "Vessel business id")
    ),
    request_body = UpdateVesselRequest,
    responses(
        (status = 200, description = "Vessel updated successfully", body = Vessel),
        (status = 400, description = "Invalid payload", body = MessageBody),
        (status = 404, description = "Vessel not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn update_vessel(
    State(state): State<AppState>,
    AppPath(path): AppPath<VesselIdPath>,
    AppJson(patch): AppJson<UpdateVesselRequest>,
) -> Result<Json<Vessel>, ApiError> {
    let vessel = crud::update(state.store.vessels(), &path.id, patch).await?;
    Ok(Json(vessel))
}

/// DELETE /api/vessels/{id} - Delete a vessel
#[utoipa::path(
    delete,
    path = "/api/vessels/{id}",
    tag = "Vessels",
    params(
        ("id" = String, Path, description = "Vessel business id")
    ),
    responses(
        (status = 200, description = "Vessel deleted successfully", body = MessageBody),
        (status = 404, description = "Vessel not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn delete_vessel(
    State(state): State<AppState>,
    AppPath(path): AppPath<VesselIdPath>,
) -> Result<Json<MessageBody>, ApiError> {
    let body = crud::remove(state.store.vessels(), &path.id).await?;
    Ok(Json(body))
}

/// PATCH /api/vessels/{id}/location - Replace the vessel's current location
#[utoipa::path(
    patch,
    path = "/api/vessels/{id}/location",
    tag = "Vessels",
    params(
        ("id" = String, Path, description = "Vessel business id")
    ),
    request_body = Location,
    responses(
        (status = 200, description = "Location updated successfully", body = Vessel),
        (status = 400, description = "Invalid payload", body = MessageBody),
        (status = 404, description = "Vessel not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn update_vessel_location(
    State(state): State<AppState>,
    AppPath(path): AppPath<VesselIdPath>,
    AppJson(location): AppJson<Location>,
) -> Result<Json<Vessel>, ApiError> {
    let vessel = crud::mutate(state.store.vessels(), &path.id, |vessel| {
        vessel.current_location = location;
    })
    .await?;
    Ok(Json(vessel))
}
