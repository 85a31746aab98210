use super::document::Document;
use super::enums::{MaintenanceStatus, MaintenanceType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Part {
    pub name: String,
    pub quantity: u32,
    pub cost: f64,
}

/// A maintenance record for one vessel. Technicians are free-text names,
/// not crew references.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: Uuid,
    pub maintenance_id: String,
    pub vessel: Uuid,
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

/// Request body for scheduling maintenance.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateMaintenanceRequest {
    pub maintenance_id: String,
    pub vessel: Uuid,
    #[serde(rename = "type")]
    pub maintenance_type: MaintenanceType,
    pub description: String,
    pub scheduled_date: DateTime<Utc>,
    #[serde(default)]
    pub completed_date: Option<DateTime<Utc>>,
    pub status: MaintenanceStatus,
    #[serde(default)]
    pub assigned_technicians: Vec<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default)]
    pub total_cost: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update for a maintenance record.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateMaintenanceRequest {
    pub maintenance_id: Option<String>,
    pub vessel: Option<Uuid>,
    #[serde(rename = "type")]
    pub maintenance_type: Option<MaintenanceType>,
    pub description: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
    pub status: Option<MaintenanceStatus>,
    pub assigned_technicians: Option<Vec<String>>,
    pub parts: Option<Vec<Part>>,
    pub total_cost: Option<f64>,
    pub notes: Option<String>,
}

impl Document for MaintenanceRecord {
    const KIND: &'static str = "Maintenance record";
    const COLLECTION: &'static str = "maintenance";

    type Create = CreateMaintenanceRequest;
    type Update = UpdateMaintenanceRequest;

    fn from_create(request: Self::Create, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            maintenance_id: request.maintenance_id,
            vessel: request.vessel,
            maintenance_type: request.maintenance_type,
            description: request.description,
            scheduled_date: request.scheduled_date,
            completed_date: request.completed_date,
            status: request.status,
            assigned_technicians: request.assigned_technicians,
            parts: request.parts,
            total_cost: request.total_cost.unwrap_or(0.0),
            notes: request.notes,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, patch: Self::Update) {
        if let Some(maintenance_id) = patch.maintenance_id {
            self.maintenance_id = maintenance_id;
        }
        if let Some(vessel) = patch.vessel {
            self.vessel = vessel;
        }
        if let Some(maintenance_type) = patch.maintenance_type {
            self.maintenance_type = maintenance_type;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(scheduled_date) = patch.scheduled_date {
            self.scheduled_date = scheduled_date;
        }
        if let Some(completed_date) = patch.completed_date {
            self.completed_date = Some(completed_date);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(assigned_technicians) = patch.assigned_technicians {
            self.assigned_technicians = assigned_technicians;
        }
        if let Some(parts) = patch.parts {
            self.parts = parts;
        }
        if let Some(total_cost) = patch.total_cost {
            self.total_cost = total_cost;
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
    }

    fn record_id(&self) -> Uuid {
        self.id
    }

    fn business_id(&self) -> &str {
        &self.maintenance_id
    }

    fn vessel_ref(&self) -> Option<Uuid> {
        Some(self.vessel)
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
