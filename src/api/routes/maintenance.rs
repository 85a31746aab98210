//! Maintenance routes.
//! CRUD plus the by-vessel history, the upcoming-work window and the
//! status transition with completion date.
//!
//! Responses resolve the vessel reference into a summary projection; a
//! dangling reference resolves to null.

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{delete, get, patch, post, put},
};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::app_state::AppState;
use super::crud;
use super::error::{ApiError, MessageBody};
use super::extract::{AppJson, AppPath};
use crate::models::{CreateMaintenanceRequest, MaintenanceStatus, UpdateMaintenanceRequest};
use crate::services::reference_service::{
    MaintenanceView, resolve_maintenance, resolve_maintenance_records,
};

/// How far ahead the upcoming-maintenance window looks.
const UPCOMING_WINDOW_DAYS: i64 = 30;

/// Create the maintenance router
pub fn maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_maintenance))
        .route("/", post(create_maintenance))
        .route("/upcoming/scheduled", get(upcoming_maintenance))
        .route("/vessel/{vesselId}", get(maintenance_by_vessel))
        .route("/{id}", get(get_maintenance))
        .route("/{id}", put(update_maintenance))
        .route("/{id}", delete(delete_maintenance))
        .route("/{id}/status", patch(update_maintenance_status))
}

/// Path parameters for single-record routes
#[derive(Deserialize)]
struct MaintenanceIdPath {
    id: String,
}

/// Path parameters for the by-vessel history lookup
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VesselRefPath {
    vessel_id: Uuid,
}

/// Request body for the status transition. The completion date is only
/// stored when the new status is Completed and a date was supplied.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateMaintenanceStatusRequest {
    pub status: MaintenanceStatus,
    #[serde(default)]
    pub completed_date: Option<DateTime<Utc>>,
}

/// GET /api/maintenance - List all maintenance records
#[utoipa::path(
    get,
    path = "/api/maintenance",
    tag = "Maintenance",
    responses(
        (status = 200, description = "Maintenance records retrieved successfully", body = Vec<MaintenanceView>),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn list_maintenance(
    State(state): State<AppState>,
) -> Result<Json<Vec<MaintenanceView>>, ApiError> {
    let records = crud::list(state.store.maintenance()).await?;
    let views = resolve_maintenance_records(state.store.as_ref(), records).await?;
    Ok(Json(views))
}

/// POST /api/maintenance - Schedule a maintenance record
#[utoipa::path(
    post,
    path = "/api/maintenance",
    tag = "Maintenance",
    request_body = CreateMaintenanceRequest,
    responses(
        (status = 201, description = "Maintenance record created successfully", body = MaintenanceView),
        (status = 400, description = "Invalid payload or duplicate maintenance id", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn create_maintenance(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateMaintenanceRequest>,
) -> Result<(StatusCode, Json<MaintenanceView>), ApiError> {
    let record = crud::create(state.store.maintenance(), request).await?;
    let view = resolve_maintenance(state.store.as_ref(), record).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/maintenance/upcoming/scheduled - Maintenance due within the
/// next 30 days and still in the Scheduled or Delayed state
#[utoipa::path(
    get,
    path = "/api/maintenance/upcoming/scheduled",
    tag = "Maintenance",
    responses(
        (status = 200, description = "Maintenance records retrieved successfully", body = Vec<MaintenanceView>),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn upcoming_maintenance(
    State(state): State<AppState>,
) -> Result<Json<Vec<MaintenanceView>>, ApiError> {
    let from = Utc::now();
    let to = from + Duration::days(UPCOMING_WINDOW_DAYS);
    let records = state.store.maintenance_upcoming(from, to).await?;
    let views = resolve_maintenance_records(state.store.as_ref(), records).await?;
    Ok(Json(views))
}

/// GET /api/maintenance/vessel/{vesselId} - Maintenance history of a vessel
#[utoipa::path(
    get,
    path = "/api/maintenance/vessel/{vesselId}",
    tag = "Maintenance",
    params(
        ("vesselId" = Uuid, Path, description = "Vessel record id")
    ),
    responses(
        (status = 200, description = "Maintenance records retrieved successfully", body = Vec<MaintenanceView>),
        (status = 400, description = "Malformed vessel id", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn maintenance_by_vessel(
    State(state): State<AppState>,
    AppPath(path): AppPath<VesselRefPath>,
) -> Result<Json<Vec<MaintenanceView>>, ApiError> {
    let records = state.store.maintenance_by_vessel(path.vessel_id).await?;
    let views = resolve_maintenance_records(state.store.as_ref(), records).await?;
    Ok(Json(views))
}

/// GET /api/maintenance/{id} - Get one maintenance record by business id
#[utoipa::path(
    get,
    path = "/api/maintenance/{id}",
    tag = "Maintenance",
    params(
        ("id" = String, Path, description = "Maintenance business id")
    ),
    responses(
        (status = 200, description = "Maintenance record retrieved successfully", body = MaintenanceView),
        (status = 404, description = "Maintenance record not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn get_maintenance(
    State(state): State<AppState>,
    AppPath(path): AppPath<MaintenanceIdPath>,
) -> Result<Json<MaintenanceView>, ApiError> {
    let record = crud::fetch(state.store.maintenance(), &path.id).await?;
    let view = resolve_maintenance(state.store.as_ref(), record).await?;
    Ok(Json(view))
}

/// PUT /api/maintenance/{id} - Update a maintenance record
#[utoipa::path(
    put,
    path = "/api/maintenance/{id}",
    tag = "Maintenance",
    params(
        ("id" = String, Path, description = "Maintenance business id")
    ),
    request_body = UpdateMaintenanceRequest,
    responses(
        (status = 200, description = "Maintenance record updated successfully", body = MaintenanceView),
        (status = 400, description = "Invalid payload", body = MessageBody),
        (status = 404, description = "Maintenance record not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn update_maintenance(
    State(state): State<AppState>,
    AppPath(path): AppPath<MaintenanceIdPath>,
    AppJson(patch): AppJson<UpdateMaintenanceRequest>,
) -> Result<Json<MaintenanceView>, ApiError> {
    let record = crud::update(state.store.maintenance(), &path.id, patch).await?;
    let view = resolve_maintenance(state.store.as_ref(), record).await?;
    Ok(Json(view))
}

/// DELETE /api/maintenance/{id} - Delete a maintenance record
#[utoipa::path(
    delete,
    path = "/api/maintenance/{id}",
    tag = "Maintenance",
    params(
        ("id" = String, Path, description = "Maintenance business id")
    ),
    responses(
        (status = 200, description = "Maintenance record deleted successfully", body = MessageBody),
        (status = 404, description = "Maintenance record not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn delete_maintenance(
    State(state): State<AppState>,
    AppPath(path): AppPath<MaintenanceIdPath>,
) -> Result<Json<MessageBody>, ApiError> {
    let body = crud::remove(state.store.maintenance(), &path.id).await?;
    Ok(Json(body))
}

/// PATCH /api/maintenance/{id}/status - Set the maintenance status
#[utoipa::path(
    patch,
    path = "/api/maintenance/{id}/status",
    tag = "Maintenance",
    params(
        ("id" = String, Path, description = "Maintenance business id")
    ),
    request_body = UpdateMaintenanceStatusRequest,
    responses(
        (status = 200, description = "Status updated successfully", body = MaintenanceView),
        (status = 400, description = "Invalid payload", body = MessageBody),
        (status = 404, description = "Maintenance record not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn update_maintenance_status(
    State(state): State<AppState>,
    AppPath(path): AppPath<MaintenanceIdPath>,
    AppJson(request): AppJson<UpdateMaintenanceStatusRequest>,
) -> Result<Json<MaintenanceView>, ApiError> {
    let record = crud::mutate(state.store.maintenance(), &path.id, |record| {
        record.status = request.status;
        if request.status == MaintenanceStatus::Completed {
            if let Some(date) = request.completed_date {
                record.completed_date = Some(date);
            }
        }
    })
    .await?;
    let view = resolve_maintenance(state.store.as_ref(), record).await?;
    Ok(Json(view))
}
