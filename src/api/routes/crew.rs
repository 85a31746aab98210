//! Crew routes.
//! CRUD plus vessel assignment, the by-vessel roster lookup and the
//! expiring-certifications report.
//!
//! Responses resolve the `currentVessel` reference into a summary
//! projection; a dangling reference resolves to null.

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{delete, get, patch, post, put},
};
use chrono::{Duration, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::app_state::AppState;
use super::crud;
use super::error::{ApiError, MessageBody};
use super::extract::{AppJson, AppPath};
use crate::models::{CreateCrewRequest, UpdateCrewRequest};
use crate::services::reference_service::{
    CrewMemberView, resolve_crew_member, resolve_crew_members,
};

/// How far ahead the expiring-certifications report looks.
const EXPIRY_WINDOW_DAYS: i64 = 30;

/// Create the crew router
pub fn crew_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_crew))
        .route("/", post(create_crew_member))
        .route("/expiring-certifications", get(crew_with_expiring_certifications))
        .route("/vessel/{vesselId}", get(crew_by_vessel))
        .route("/{id}", get(get_crew_member))
        .route("/{id}", put(update_crew_member))
        .route("/{id}", delete(delete_crew_member))
        .route("/{id}/assign", patch(assign_crew_member))
}

/// Path parameters for single-crew-member routes
#[derive(Deserialize)]
struct CrewIdPath {
    id: String,
}

/// Path parameters for the by-vessel roster lookup
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VesselRefPath {
    vessel_id: Uuid,
}

/// Request body for the assignment operation. A null or absent vesselId
/// clears the assignment; the vessel's existence is not checked.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssignVesselRequest {
    #[serde(default)]
    pub vessel_id: Option<Uuid>,
}

/// GET /api/crew - List all crew members
#[utoipa::path(
    get,
    path = "/api/crew",
    tag = "Crew",
    responses(
        (status = 200, description = "Crew members retrieved successfully", body = Vec<CrewMemberView>),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn list_crew(State(state): State<AppState>) -> Result<Json<Vec<CrewMemberView>>, ApiError> {
    let members = crud::list(state.store.crew()).await?;
    let views = resolve_crew_members(state.store.as_ref(), members).await?;
    Ok(Json(views))
}

/// POST /api/crew - Add a crew member
#[utoipa::path(
    post,
    path = "/api/crew",
    tag = "Crew",
    request_body = CreateCrewRequest,
    responses(
        (status = 201, description = "Crew member created successfully", body = CrewMemberView),
        (status = 400, description = "Invalid payload or duplicate crew id", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn create_crew_member(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateCrewRequest>,
) -> Result<(StatusCode, Json<CrewMemberView>), ApiError> {
    let member = crud::create(state.store.crew(), request).await?;
    let view = resolve_crew_member(state.store.as_ref(), member).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/crew/expiring-certifications - Crew whose license or any
/// certification expires within the next 30 days
#[utoipa::path(
    get,
    path = "/api/crew/expiring-certifications",
    tag = "Crew",
    responses(
        (status = 200, description = "Crew members retrieved successfully", body = Vec<CrewMemberView>),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn crew_with_expiring_certifications(
    State(state): State<AppState>,
) -> Result<Json<Vec<CrewMemberView>>, ApiError> {
    let cutoff = Utc::now() + Duration::days(EXPIRY_WINDOW_DAYS);
    let members = state.store.crew_with_expiring_certifications(cutoff).await?;
    let views = resolve_crew_members(state.store.as_ref(), members).await?;
    Ok(Json(views))
}

/// GET /api/crew/vessel/{vesselId} - Crew currently assigned to a vessel
#[utoipa::path(
    get,
    path = "/api/crew/vessel/{vesselId}",
    tag = "Crew",
    params(
        ("vesselId" = Uuid, Path, description = "Vessel record id")
    ),
    responses(
        (status = 200, description = "Crew members retrieved successfully", body = Vec<CrewMemberView>),
        (status = 400, description = "Malformed vessel id", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn crew_by_vessel(
    State(state): State<AppState>,
    AppPath(path): AppPath<VesselRefPath>,
) -> Result<Json<Vec<CrewMemberView>>, ApiError> {
    let members = state.store.crew_by_vessel(path.vessel_id).await?;
    let views = resolve_crew_members(state.store.as_ref(), members).await?;
    Ok(Json(views))
}

/// GET /api/crew/{id} - Get one crew member by business id
#[utoipa::path(
    get,
    path = "/api/crew/{id}",
    tag = "Crew",
    params(
        ("id" = String, Path, description = "Crew business id")
    ),
    responses(
        (status = 200, description = "Crew member retrieved successfully", body = CrewMemberView),
        (status = 404, description = "Crew member not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn get_crew_member(
    State(state): State<AppState>,
    AppPath(path): AppPath<CrewIdPath>,
) -> Result<Json<CrewMemberView>, ApiError> {
    let member = crud::fetch(state.store.crew(), &path.id).await?;
    let view = resolve_crew_member(state.store.as_ref(), member).await?;
    Ok(Json(view))
}

/// PUT /api/crew/{id} - Update a crew member
#[utoipa::path(
    put,
    path = "/api/crew/{id}",
    tag = "Crew",
    params(
        ("id" = String, Path, description = "Crew business id")
    ),
    request_body = UpdateCrewRequest,
    responses(
        (status = 200, description = "Crew member updated successfully", body = CrewMemberView),
        (status = 400, description = "Invalid payload", body = MessageBody),
        (status = 404, description = "Crew member not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn update_crew_member(
    State(state): State<AppState>,
    AppPath(path): AppPath<CrewIdPath>,
    AppJson(patch): AppJson<UpdateCrewRequest>,
) -> Result<Json<CrewMemberView>, ApiError> {
    let member = crud::update(state.store.crew(), &path.id, patch).await?;
    let view = resolve_crew_member(state.store.as_ref(), member).await?;
    Ok(Json(view))
}

/// DELETE /api/crew/{id} - Delete a crew member
#[utoipa::path(
    delete,
    path = "/api/crew/{id}",
    tag = "Crew",
    params(
        ("id" = String, Path, description = "Crew business id")
    ),
    responses(
        (status = 200, description = "Crew member deleted successfully", body = MessageBody),
        (status = 404, description = "Crew member not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn delete_crew_member(
    State(state): State<AppState>,
    AppPath(path): AppPath<CrewIdPath>,
) -> Result<Json<MessageBody>, ApiError> {
    let body = crud::remove(state.store.crew(), &path.id).await?;
    Ok(Json(body))
}

/// PATCH /api/crew/{id}/assign - Assign the crew member to a vessel
#[utoipa::path(
    patch,
    path = "/api/crew/{id}/assign",
    tag = "Crew",
    params(
        ("id" = String, Path, description = "Crew business id")
    ),
    request_body = AssignVesselRequest,
    responses(
        (status = 200, description = "Assignment updated successfully", body = CrewMemberView),
        (status = 400, description = "Invalid payload", body = MessageBody),
        (status = 404, description = "Crew member not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    )
)]
pub async fn assign_crew_member(
    State(state): State<AppState>,
    AppPath(path): AppPath<CrewIdPath>,
    AppJson(request): AppJson<AssignVesselRequest>,
) -> Result<Json<CrewMemberView>, ApiError> {
    let member = crud::mutate(state.store.crew(), &path.id, |member| {
        member.current_vessel = request.vessel_id;
    })
    .await?;
    let view = resolve_crew_member(state.store.as_ref(), member).await?;
    Ok(Json(view))
}
