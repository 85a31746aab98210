use super::document::Document;
use super::enums::CrewStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Certification {
    pub name: String,
    pub issued_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
}

/// A crew member. The vessel assignment is a weak reference by record id;
/// the referenced vessel may no longer exist.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrewMember {
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
    pub current_vessel: Option<Uuid>,
    pub certifications: Vec<Certification>,
    pub status: CrewStatus,
    pub join_date: DateTime<Utc>,
    pub contract_end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for adding a crew member.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateCrewRequest {
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
    #[serde(default)]
    pub current_vessel: Option<Uuid>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    pub status: CrewStatus,
    pub join_date: DateTime<Utc>,
    pub contract_end_date: DateTime<Utc>,
}

/// Partial update for a crew member. Absent fields are left unchanged;
/// clearing the vessel assignment goes through the assign operation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCrewRequest {
    pub crew_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub nationality: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub license_number: Option<String>,
    pub license_expiry: Option<DateTime<Utc>>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub current_vessel: Option<Uuid>,
    pub certifications: Option<Vec<Certification>>,
    pub status: Option<CrewStatus>,
    pub join_date: Option<DateTime<Utc>>,
    pub contract_end_date: Option<DateTime<Utc>>,
}

impl Document for CrewMember {
    const KIND: &'static str = "Crew member";
    const COLLECTION: &'static str = "crew";

    type Create = CreateCrewRequest;
    type Update = UpdateCrewRequest;

    fn from_create(request: Self::Create, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            crew_id: request.crew_id,
            first_name: request.first_name,
            last_name: request.last_name,
            position: request.position,
            nationality: request.nationality,
            date_of_birth: request.date_of_birth,
            license_number: request.license_number,
            license_expiry: request.license_expiry,
            contact_number: request.contact_number,
            email: request.email,
            current_vessel: request.current_vessel,
            certifications: request.certifications,
            status: request.status,
            join_date: request.join_date,
            contract_end_date: request.contract_end_date,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, patch: Self::Update) {
        if let Some(crew_id) = patch.crew_id {
            self.crew_id = crew_id;
        }
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(nationality) = patch.nationality {
            self.nationality = nationality;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            self.date_of_birth = date_of_birth;
        }
        if let Some(license_number) = patch.license_number {
            self.license_number = license_number;
        }
        if let Some(license_expiry) = patch.license_expiry {
            self.license_expiry = license_expiry;
        }
        if let Some(contact_number) = patch.contact_number {
            self.contact_number = contact_number;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(current_vessel) = patch.current_vessel {
            self.current_vessel = Some(current_vessel);
        }
        if let Some(certifications) = patch.certifications {
            self.certifications = certifications;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(join_date) = patch.join_date {
            self.join_date = join_date;
        }
        if let Some(contract_end_date) = patch.contract_end_date {
            self.contract_end_date = contract_end_date;
        }
    }

    fn record_id(&self) -> Uuid {
        self.id
    }

    fn business_id(&self) -> &str {
        &self.crew_id
    }

    fn vessel_ref(&self) -> Option<Uuid> {
        self.current_vessel
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
