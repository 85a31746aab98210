use super::document::Document;
use super::enums::VesselStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Current position of a vessel. Replaced wholesale by location updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vessel {
    pub id: Uuid,
    pub vessel_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub vessel_type: String,
    pub flag: String,
    pub year_built: i32,
    pub gross_tonnage: f64,
    pub length: f64,
    pub beam: f64,
    pub draft: f64,
    pub status: VesselStatus,
    pub current_location: Location,
    pub last_maintenance: DateTime<Utc>,
    pub next_scheduled_maintenance: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for registering a vessel.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateVesselRequest {
    pub vessel_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub vessel_type: String,
    pub flag: String,
    pub year_built: i32,
    pub gross_tonnage: f64,
    pub length: f64,
    pub beam: f64,
    pub draft: f64,
    pub status: VesselStatus,
    pub current_location: Location,
    /// Defaults to the creation time when omitted.
    #[serde(default)]
    pub last_maintenance: Option<DateTime<Utc>>,
    pub next_scheduled_maintenance: DateTime<Utc>,
}

/// Partial update for a vessel. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateVesselRequest {
    pub vessel_id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub vessel_type: Option<String>,
    pub flag: Option<String>,
    pub year_built: Option<i32>,
    pub gross_tonnage: Option<f64>,
    pub length: Option<f64>,
    pub beam: Option<f64>,
    pub draft: Option<f64>,
    pub status: Option<VesselStatus>,
    pub current_location: Option<Location>,
    pub last_maintenance: Option<DateTime<Utc>>,
    pub next_scheduled_maintenance: Option<DateTime<Utc>>,
}

impl Document for Vessel {
    const KIND: &'static str = "Vessel";
    const COLLECTION: &'static str = "vessels";

    type Create = CreateVesselRequest;
    type Update = UpdateVesselRequest;

    fn from_create(request: Self::Create, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            vessel_id: request.vessel_id,
            name: request.name,
            vessel_type: request.vessel_type,
            flag: request.flag,
            year_built: request.year_built,
            gross_tonnage: request.gross_tonnage,
            length: request.length,
            beam: request.beam,
            draft: request.draft,
            status: request.status,
            current_location: request.current_location,
            last_maintenance: request.last_maintenance.unwrap_or(now),
            next_scheduled_maintenance: request.next_scheduled_maintenance,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, patch: Self::Update) {
        if let Some(vessel_id) = patch.vessel_id {
            self.vessel_id = vessel_id;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(vessel_type) = patch.vessel_type {
            self.vessel_type = vessel_type;
        }
        if let Some(flag) = patch.flag {
            self.flag = flag;
        }
        if let Some(year_built) = patch.year_built {
            self.year_built = year_built;
        }
        if let Some(gross_tonnage) = patch.gross_tonnage {
            self.gross_tonnage = gross_tonnage;
        }
        if let Some(length) = patch.length {
            self.length = length;
        }
        if let Some(beam) = patch.beam {
            self.beam = beam;
        }
        if let Some(draft) = patch.draft {
            self.draft = draft;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(current_location) = patch.current_location {
            self.current_location = current_location;
        }
        if let Some(last_maintenance) = patch.last_maintenance {
            self.last_maintenance = last_maintenance;
        }
        if let Some(next_scheduled_maintenance) = patch.next_scheduled_maintenance {
            self.next_scheduled_maintenance = next_scheduled_maintenance;
        }
    }

    fn record_id(&self) -> Uuid {
        self.id
    }

    fn business_id(&self) -> &str {
        &self.vessel_id
    }

    fn vessel_ref(&self) -> Option<Uuid> {
        None
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
