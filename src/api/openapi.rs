//! OpenAPI specification definition.
//!
//! Aggregates all route handlers and schemas for OpenAPI documentation generation.

use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Vessels
        crate::routes::vessels::list_vessels,
        crate::routes::vessels::create_vessel,
        crate::routes::vessels::vessels_by_status,
        crate::routes::vessels::get_vessel,
        crate::routes::vessels::update_vessel,
        crate::routes::vessels::delete_vessel,
        crate::routes::vessels::update_vessel_location,
        // Crew
        crate::routes::crew::list_crew,
        crate::routes::crew::create_crew_member,
        crate::routes::crew::crew_with_expiring_certifications,
        crate::routes::crew::crew_by_vessel,
        crate::routes::crew::get_crew_member,
        crate::routes::crew::update_crew_member,
        crate::routes::crew::delete_crew_member,
        crate::routes::crew::assign_crew_member,
        // Voyages
        crate::routes::voyages::list_voyages,
        crate::routes::voyages::create_voyage,
        crate::routes::voyages::voyages_by_vessel,
        crate::routes::voyages::get_voyage,
        crate::routes::voyages::update_voyage,
        crate::routes::voyages::delete_voyage,
        crate::routes::voyages::update_voyage_status,
        crate::routes::voyages::add_route_point,
        // Maintenance
        crate::routes::maintenance::list_maintenance,
        crate::routes::maintenance::create_maintenance,
        crate::routes::maintenance::upcoming_maintenance,
        crate::routes::maintenance::maintenance_by_vessel,
        crate::routes::maintenance::get_maintenance,
        crate::routes::maintenance::update_maintenance,
        crate::routes::maintenance::delete_maintenance,
        crate::routes::maintenance::update_maintenance_status,
        // OpenAPI
        crate::routes::openapi::serve_openapi_json,
    ),
    components(schemas(
        // Vessel types
        crate::models::Vessel,
        crate::models::Location,
        crate::models::VesselStatus,
        crate::models::CreateVesselRequest,
        crate::models::UpdateVesselRequest,
        // Crew types
        crate::models::CrewMember,
        crate::models::Certification,
        crate::models::CrewStatus,
        crate::models::CreateCrewRequest,
        crate::models::UpdateCrewRequest,
        crate::routes::crew::AssignVesselRequest,
        // Voyage types
        crate::models::Voyage,
        crate::models::Cargo,
        crate::models::RoutePoint,
        crate::models::VoyageStatus,
        crate::models::CreateVoyageRequest,
        crate::models::UpdateVoyageRequest,
        crate::routes::voyages::UpdateVoyageStatusRequest,
        crate::routes::voyages::AddRoutePointRequest,
        // Maintenance types
        crate::models::MaintenanceRecord,
        crate::models::Part,
        crate::models::MaintenanceType,
        crate::models::MaintenanceStatus,
        crate::models::CreateMaintenanceRequest,
        crate::models::UpdateMaintenanceRequest,
        crate::routes::maintenance::UpdateMaintenanceStatusRequest,
        // Resolved views
        crate::services::reference_service::VesselSummary,
        crate::services::reference_service::CrewSummary,
        crate::services::reference_service::CrewMemberView,
        crate::services::reference_service::VoyageView,
        crate::services::reference_service::MaintenanceView,
        // Shared response body
        crate::routes::error::MessageBody,
    )),
    modifiers(&VersionAddon),
    tags(
        (name = "Vessels", description = "Vessel registry, status filter and location updates"),
        (name = "Crew", description = "Crew roster, assignments and certification reports"),
        (name = "Voyages", description = "Voyage planning, status and route log"),
        (name = "Maintenance", description = "Maintenance scheduling and history"),
        (name = "OpenAPI", description = "OpenAPI specification"),
    ),
    info(
        title = "Fleet Management API",
        description = "REST API for managing vessels, crew, voyages and maintenance records",
        version = "1.0.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    )
)]
pub struct ApiDoc;

struct VersionAddon;

impl Modify for VersionAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        // Keep the served version in sync with Cargo.toml
        openapi.info.version = env!("CARGO_PKG_VERSION").to_string();
    }
}
