use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum VesselStatus {
    Active,
    Maintenance,
    Docked,
    #[serde(rename = "In Transit")]
    InTransit,
}

impl VesselStatus {
    /// Wire-format name, as stored and matched in status filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            VesselStatus::Active => "Active",
            VesselStatus::Maintenance => "Maintenance",
            VesselStatus::Docked => "Docked",
            VesselStatus::InTransit => "In Transit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CrewStatus {
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Training,
    #[serde(rename = "Off Duty")]
    OffDuty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum VoyageStatus {
    Planned,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Delayed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MaintenanceType {
    Routine,
    Emergency,
    Scheduled,
    Inspection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MaintenanceStatus {
    Scheduled,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Delayed,
    Cancelled,
}
