//! Reference resolution for API responses.
//!
//! Records store weak references (vessel/crew record ids). Before a record
//! crosses the API boundary those references are resolved into lightweight
//! projections so the presentation layer never issues a second lookup.
//! Resolution is read-only and best-effort: a dangling vessel reference
//! becomes `null`, dangling crew entries are dropped from the list.

use crate::models::{
    Cargo, Certification, CrewMember, CrewStatus, MaintenanceRecord, MaintenanceStatus,
    MaintenanceType, Part, RoutePoint, Voyage, VoyageStatus,
};
use crate::storage::{FleetStore, StorageError};
use chrono::{DateTime, Utc};
use futures_util::future::try_join_all;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Projection of a vessel, embedded in place of a raw reference.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VesselSummary {
    pub id: Uuid,
    pub vessel_id: String,
    pub name: String,
}

impl From<&crate::models::Vessel> for VesselSummary {
    fn from(vessel: &crate::models::Vessel) -> Self {
        Self {
            id: vessel.id,
            vessel_id: vessel.vessel_id.clone(),
            name: vessel.name.clone(),
        }
    }
}

/// Projection of a crew member, embedded in voyage responses.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrewSummary {
    pub id: Uuid,
    pub crew_id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
}

impl From<&CrewMember> for CrewSummary {
    fn from(member: &CrewMember) -> Self {
        Self {
            id: member.id,
            crew_id: member.crew_id.clone(),
            first_name: member.first_name.clone(),
            last_name: member.last_name.clone(),
            position: member.position.clone(),
        }
    }
}

/// Crew member with its vessel assignment resolved.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrewMemberView {
    pub id: Uuid,
    pub crew_id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub nationality: String,
    pub date_of_birth: DateTime<Utc>,
    pub license_number: String,
    pub license_expiry: DateTime<Utc>,
    pub contact_number: String,
    pub email: String,
    pub current_vessel: Option<VesselSummary>,
    pub certifications: Vec<Certification>,
    pub status: CrewStatus,
    pub join_date: DateTime<Utc>,
    pub contract_end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Voyage with its vessel and crew references resolved.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoyageView {
    pub id: Uuid,
    pub voyage_id: String,
    pub vessel: Option<VesselSummary>,
    pub departure_port: String,
    pub destination_port: String,
    pub departure_time: DateTime<Utc>,
    pub estimated_arrival: DateTime<Utc>,
    pub actual_arrival: Option<DateTime<Utc>>,
    pub status: VoyageStatus,
    pub cargo: Cargo,
    pub route: Vec<RoutePoint>,
    pub fuel_consumption: f64,
    pub distance: f64,
    pub crew: Vec<CrewSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Maintenance record with its vessel reference resolved.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceView {
    pub id: Uuid,
    pub maintenance_id: String,
    pub vessel: Option<VesselSummary>,
    #[serde(rename = "type")]
    pub maintenance_type: MaintenanceType,
    pub description: String,
    pub scheduled_date: DateTime<Utc>,
    pub completed_date: Option<DateTime<Utc>>,
    pub status: MaintenanceStatus,
    pub assigned_technicians: Vec<String>,
    pub parts: Vec<Part>,
    pub total_cost: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

async fn vessel_summary(
    store: &dyn FleetStore,
    id: Uuid,
) -> Result<Option<VesselSummary>, StorageError> {
    Ok(store
        .vessels()
        .find_by_record_id(id)
        .await?
        .map(|vessel| VesselSummary::from(&vessel)))
}

pub async fn resolve_crew_member(
    store: &dyn FleetStore,
    member: CrewMember,
) -> Result<CrewMemberView, StorageError> {
    let current_vessel = match member.current_vessel {
        Some(id) => vessel_summary(store, id).await?,
        None => None,
    };
    Ok(CrewMemberView {
        id: member.id,
        crew_id: member.crew_id,
        first_name: member.first_name,
        last_name: member.last_name,
        position: member.position,
        nationality: member.nationality,
        date_of_birth: member.date_of_birth,
        license_number: member.license_number,
        license_expiry: member.license_expiry,
        contact_number: member.contact_number,
        email: member.email,
        current_vessel,
        certifications: member.certifications,
        status: member.status,
        join_date: member.join_date,
        contract_end_date: member.contract_end_date,
        created_at: member.created_at,
        updated_at: member.updated_at,
    })
}

pub async fn resolve_crew_members(
    store: &dyn FleetStore,
    members: Vec<CrewMember>,
) -> Result<Vec<CrewMemberView>, StorageError> {
    try_join_all(
        members
            .into_iter()
            .map(|member| resolve_crew_member(store, member)),
    )
    .await
}

pub async fn resolve_voyage(
    store: &dyn FleetStore,
    voyage: Voyage,
) -> Result<VoyageView, StorageError> {
    let vessel = vessel_summary(store, voyage.vessel).await?;
    let lookups = voyage
        .crew
        .iter()
        .map(|id| store.crew().find_by_record_id(*id));
    let members = try_join_all(lookups).await?;
    // Dangling crew references are dropped rather than surfaced as errors.
    let crew = members
        .iter()
        .flatten()
        .map(CrewSummary::from)
        .collect();
    Ok(VoyageView {
        id: voyage.id,
        voyage_id: voyage.voyage_id,
        vessel,
        departure_port: voyage.departure_port,
        destination_port: voyage.destination_port,
        departure_time: voyage.departure_time,
        estimated_arrival: voyage.estimated_arrival,
        actual_arrival: voyage.actual_arrival,
        status: voyage.status,
        cargo: voyage.cargo,
        route: voyage.route,
        fuel_consumption: voyage.fuel_consumption,
        distance: voyage.distance,
        crew,
        created_at: voyage.created_at,
        updated_at: voyage.updated_at,
    })
}

pub async fn resolve_voyages(
    store: &dyn FleetStore,
    voyages: Vec<Voyage>,
) -> Result<Vec<VoyageView>, StorageError> {
    try_join_all(
        voyages
            .into_iter()
            .map(|voyage| resolve_voyage(store, voyage)),
    )
    .await
}

pub async fn resolve_maintenance(
    store: &dyn FleetStore,
    record: MaintenanceRecord,
) -> Result<MaintenanceView, StorageError> {
    let vessel = vessel_summary(store, record.vessel).await?;
    Ok(MaintenanceView {
        id: record.id,
        maintenance_id: record.maintenance_id,
        vessel,
        maintenance_type: record.maintenance_type,
        description: record.description,
        scheduled_date: record.scheduled_date,
        completed_date: record.completed_date,
        status: record.status,
        assigned_technicians: record.assigned_technicians,
        parts: record.parts,
        total_cost: record.total_cost,
        notes: record.notes,
        created_at: record.created_at,
        updated_at: record.updated_at,
    })
}

pub async fn resolve_maintenance_records(
    store: &dyn FleetStore,
    records: Vec<MaintenanceRecord>,
) -> Result<Vec<MaintenanceView>, StorageError> {
    try_join_all(
        records
            .into_iter()
            .map(|record| resolve_maintenance(store, record)),
    )
    .await
}
