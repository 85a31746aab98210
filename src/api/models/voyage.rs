use super::document::Document;
use super::enums::VoyageStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Cargo {
    #[serde(rename = "type")]
    pub cargo_type: String,
    pub weight: f64,
    pub description: String,
}

/// One sample of a voyage's track log. The timestamp is server-assigned
/// at append time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoutePoint {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: DateTime<Utc>,
}

/// A voyage. `vessel` and `crew` are weak references by record id; the
/// route log is append-only and ordered by insertion.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Voyage {
    pub id: Uuid,
    pub voyage_id: String,
    pub vessel: Uuid,
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
    pub crew: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for planning a voyage. The route always starts empty and
/// only grows through route-point appends.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateVoyageRequest {
    pub voyage_id: String,
    pub vessel: Uuid,
    pub departure_port: String,
    pub destination_port: String,
    pub departure_time: DateTime<Utc>,
    pub estimated_arrival: DateTime<Utc>,
    #[serde(default)]
    pub actual_arrival: Option<DateTime<Utc>>,
    pub status: VoyageStatus,
    pub cargo: Cargo,
    #[serde(default)]
    pub fuel_consumption: Option<f64>,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub crew: Vec<Uuid>,
}

/// Partial update for a voyage. The route log cannot be rewritten here.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateVoyageRequest {
    pub voyage_id: Option<String>,
    pub vessel: Option<Uuid>,
    pub departure_port: Option<String>,
    pub destination_port: Option<String>,
    pub departure_time: Option<DateTime<Utc>>,
    pub estimated_arrival: Option<DateTime<Utc>>,
    pub actual_arrival: Option<DateTime<Utc>>,
    pub status: Option<VoyageStatus>,
    pub cargo: Option<Cargo>,
    pub fuel_consumption: Option<f64>,
    pub distance: Option<f64>,
    pub crew: Option<Vec<Uuid>>,
}

impl Document for Voyage {
    const KIND: &'static str = "Voyage";
    const COLLECTION: &'static str = "voyages";

    type Create = CreateVoyageRequest;
    type Update = UpdateVoyageRequest;

    fn from_create(request: Self::Create, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            voyage_id: request.voyage_id,
            vessel: request.vessel,
            departure_port: request.departure_port,
            destination_port: request.destination_port,
            departure_time: request.departure_time,
            estimated_arrival: request.estimated_arrival,
            actual_arrival: request.actual_arrival,
            status: request.status,
            cargo: request.cargo,
            route: Vec::new(),
            fuel_consumption: request.fuel_consumption.unwrap_or(0.0),
            distance: request.distance.unwrap_or(0.0),
            crew: request.crew,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, patch: Self::Update) {
        if let Some(voyage_id) = patch.voyage_id {
            self.voyage_id = voyage_id;
        }
        if let Some(vessel) = patch.vessel {
            self.vessel = vessel;
        }
        if let Some(departure_port) = patch.departure_port {
            self.departure_port = departure_port;
        }
        if let Some(destination_port) = patch.destination_port {
            self.destination_port = destination_port;
        }
        if let Some(departure_time) = patch.departure_time {
            self.departure_time = departure_time;
        }
        if let Some(estimated_arrival) = patch.estimated_arrival {
            self.estimated_arrival = estimated_arrival;
        }
        if let Some(actual_arrival) = patch.actual_arrival {
            self.actual_arrival = Some(actual_arrival);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(cargo) = patch.cargo {
            self.cargo = cargo;
        }
        if let Some(fuel_consumption) = patch.fuel_consumption {
            self.fuel_consumption = fuel_consumption;
        }
        if let Some(distance) = patch.distance {
            self.distance = distance;
        }
        if let Some(crew) = patch.crew {
            self.crew = crew;
        }
    }

    fn record_id(&self) -> Uuid {
        self.id
    }

    fn business_id(&self) -> &str {
        &self.voyage_id
    }

    fn vessel_ref(&self) -> Option<Uuid> {
        Some(self.vessel)
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
