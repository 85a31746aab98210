//! Voyage routes.
//! CRUD plus the by-vessel lookup, the status transition and the
//! append-only route log.
//!
//! Responses resolve the vessel and crew references into summary
//! projections; dangling references resolve to null or are dropped from
//! the crew list.

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{delete, get, patch, post, put},
};
use chrono::Utc;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::app_state::AppState;
use super::crud;
use super::error::{ApiError, MessageBody};
use super::extract::{AppJson, AppPath};
use crate::models::{CreateVoyageRequest, Document, UpdateVoyageRequest, Voyage, VoyageStatus};
use crate::services::reference_service::{VoyageView, resolve_voyage, resolve_voyages};

/// Create the voyages router
pub fn voyages_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_voyages))
        .route("/", post(create_voyage))
        .route("/vessel/{vesselId}", get(voyages_by_vessel))
        .route("/{id}", get(get_voyage))
        .route("/{id}", put(update_voyage))
        .route("/{id}", delete(delete_voyage))
        .route("/{id}/status", patch(update_voyage_status))
        .route("/{id}/route", post(add_route_point))
}

/// Path parameters for single-voyage routes
#[derive(Deserialize)]
struct VoyageIdPath {
    id: String,
}

/// Path parameters for the by-vessel lookup
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VesselRefPath {
    vessel_id: Uuid,
}

/// Request body for the status transition. Any enumerated value is
/// accepted regardless of the current status.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateVoyageStatusRequest {
    pub status: VoyageStatus,
}

/// Request body for appending one route point. The timestamp is assigned
/// by the server, never taken from the client.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AddRoutePointRequest {
    pub latitude: f64,
    pub longitude: f64,
}

/// GET /api/voyages - List all voyages
#[utoipa::path(
    get,
    path = "/api/voyages",
    tag = "Voyages",
    responses(
        (status = 200, description = "Voyages retrieved successfully", body = Vec<VoyageView>),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn list_voyages(State(state): State<AppState>) -> Result<Json<Vec<VoyageView>>, ApiError> {
    let voyages = crud::list(state.store.voyages()).await?;
    let views = resolve_voyages(state.store.as_ref(), voyages).await?;
    Ok(Json(views))
}

/// POST /api/voyages - Plan a new voyage
#[utoipa::path(
    post,
    path = "/api/voyages",
    tag = "Voyages",
    request_body = CreateVoyageRequest,
    responses(
        (status = 201, description = "Voyage created successfully", body = VoyageView),
        (status = 400, description = "Invalid payload or duplicate voyage id", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn create_voyage(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateVoyageRequest>,
) -> Result<(StatusCode, Json<VoyageView>), ApiError> {
    let voyage = crud::create(state.store.voyages(), request).await?;
    let view = resolve_voyage(state.store.as_ref(), voyage).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/voyages/vessel/{vesselId} - Voyages of a vessel
#[utoipa::path(
    get,
    path = "/api/voyages/vessel/{vesselId}",
    tag = "Voyages",
    params(
        ("vesselId" = Uuid, Path, description = "Vessel record id")
    ),
    responses(
        (status = 200, description = "Voyages retrieved successfully", body = Vec<VoyageView>),
        (status = 400, description = "Malformed vessel id", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn voyages_by_vessel(
    State(state): State<AppState>,
    AppPath(path): AppPath<VesselRefPath>,
) -> Result<Json<Vec<VoyageView>>, ApiError> {
    let voyages = state.store.voyages_by_vessel(path.vessel_id).await?;
    let views = resolve_voyages(state.store.as_ref(), voyages).await?;
    Ok(Json(views))
}

/// GET /api/voyages/{id} - Get one voyage by business id
#[utoipa::path(
    get,
    path = "/api/voyages/{id}",
    tag = "Voyages",
    params(
        ("id" = String, Path, description = "Voyage business id")
    ),
    responses(
        (status = 200, description = "Voyage retrieved successfully", body = VoyageView),
        (status = 404, description = "Voyage not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn get_voyage(
    State(state): State<AppState>,
    AppPath(path): AppPath<VoyageIdPath>,
) -> Result<Json<VoyageView>, ApiError> {
    let voyage = crud::fetch(state.store.voyages(), &path.id).await?;
    let view = resolve_voyage(state.store.as_ref(), voyage).await?;
    Ok(Json(view))
}

/// PUT /api/voyages/{id} - Update a voyage
#[utoipa::path(
    put,
    path = "/api/voyages/{id}",
    tag = "Voyages",
    params(
        ("id" = String, Path, description = "Voyage business id")
    ),
    request_body = UpdateVoyageRequest,
    responses(
        (status = 200, description = "Voyage updated successfully", body = VoyageView),
        (status = 400, description = "Invalid payload", body = MessageBody),
        (status = 404, description = "Voyage not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn update_voyage(
    State(state): State<AppState>,
    AppPath(path): AppPath<VoyageIdPath>,
    AppJson(patch): AppJson<UpdateVoyageRequest>,
) -> Result<Json<VoyageView>, ApiError> {
    let voyage = crud::update(state.store.voyages(), &path.id, patch).await?;
    let view = resolve_voyage(state.store.as_ref(), voyage).await?;
    Ok(Json(view))
}

/// DELETE /api/voyages/{id} - Delete a voyage
#[utoipa::path(
    delete,
    path = "/api/voyages/{id}",
    tag = "Voyages",
    params(
        ("id" = String, Path, description = "Voyage business id")
    ),
    responses(
        (status = 200, description = "Voyage deleted successfully", body = MessageBody),
        (status = 404, description = "Voyage not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn delete_voyage(
    State(state): State<AppState>,
    AppPath(path): AppPath<VoyageIdPath>,
) -> Result<Json<MessageBody>, ApiError> {
    let body = crud::remove(state.store.voyages(), &path.id).await?;
    Ok(Json(body))
}

/// PATCH /api/voyages/{id}/status - Set the voyage status
#[utoipa::path(
    patch,
    path = "/api/voyages/{id}/status",
    tag = "Voyages",
    params(
        ("id" = String, Path, description = "Voyage business id")
    ),
    request_body = UpdateVoyageStatusRequest,
    responses(
        (status = 200, description = "Status updated successfully", body = VoyageView),
        (status = 400, description = "Invalid payload", body = MessageBody),
        (status = 404, description = "Voyage not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn update_voyage_status(
    State(state): State<AppState>,
    AppPath(path): AppPath<VoyageIdPath>,
    AppJson(request): AppJson<UpdateVoyageStatusRequest>,
) -> Result<Json<VoyageView>, ApiError> {
    let voyage = crud::mutate(state.store.voyages(), &path.id, |voyage| {
        voyage.status = request.status;
    })
    .await?;
    let view = resolve_voyage(state.store.as_ref(), voyage).await?;
    Ok(Json(view))
}

/// POST /api/voyages/{id}/route - Append one point to the route log
#[utoipa::path(
    post,
    path = "/api/voyages/{id}/route",
    tag = "Voyages",
    params(
        ("id" = String, Path, description = "Voyage business id")
    ),
    request_body = AddRoutePointRequest,
    responses(
        (status = 200, description = "Route point appended successfully", body = VoyageView),
        (status = 400, description = "Invalid payload", body = MessageBody),
        (status = 404, description = "Voyage not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn add_route_point(
    State(state): State<AppState>,
    AppPath(path): AppPath<VoyageIdPath>,
    AppJson(request): AppJson<AddRoutePointRequest>,
) -> Result<Json<VoyageView>, ApiError> {
    let voyage = state
        .store
        .append_route_point(&path.id, request.latitude, request.longitude, Utc::now())
        .await?
        .ok_or(ApiError::NotFound(Voyage::KIND))?;
    let view = resolve_voyage(state.store.as_ref(), voyage).await?;
    Ok(Json(view))
}
