//! Sample fleet data for demos and local development.
//!
//! Seeding is idempotent: records whose business id already exists are
//! skipped and their stored record ids are reused for references, so
//! re-running the seed never produces dangling references.

use crate::models::{
    Cargo, Certification, CreateCrewRequest, CreateMaintenanceRequest, CreateVesselRequest,
    CreateVoyageRequest, CrewMember, CrewStatus, Document, Location, MaintenanceRecord,
    MaintenanceStatus, MaintenanceType, Part, RoutePoint, Vessel, VesselStatus, Voyage,
    VoyageStatus,
};
use crate::storage::{Collection, FleetStore, StorageError};
use chrono::{DateTime, Duration, Utc};
use tracing::info;
use uuid::Uuid;

/// Outcome of one seeding run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedSummary {
    pub inserted: usize,
    pub skipped: usize,
}

async fn ensure<D: Document>(
    collection: &dyn Collection<D>,
    doc: D,
    summary: &mut SeedSummary,
) -> Result<D, StorageError> {
    if let Some(existing) = collection.find_by_business_id(doc.business_id()).await? {
        summary.skipped += 1;
        return Ok(existing);
    }
    let inserted = collection.insert(doc).await?;
    summary.inserted += 1;
    Ok(inserted)
}

/// Populate the store with a small sample fleet.
pub async fn seed_fleet(store: &dyn FleetStore) -> Result<SeedSummary, StorageError> {
    let mut summary = SeedSummary::default();
    let now = Utc::now();

    let explorer = ensure(
        store.vessels(),
        Vessel::from_create(ocean_explorer(now), now),
        &mut summary,
    )
    .await?;
    let star = ensure(
        store.vessels(),
        Vessel::from_create(northern_star(now), now),
        &mut summary,
    )
    .await?;
    let voyager = ensure(
        store.vessels(),
        Vessel::from_create(pacific_voyager(now), now),
        &mut summary,
    )
    .await?;

    let smith = ensure(
        store.crew(),
        CrewMember::from_create(captain_smith(explorer.id, now), now),
        &mut summary,
    )
    .await?;
    ensure(
        store.crew(),
        CrewMember::from_create(chief_rodriguez(star.id, now), now),
        &mut summary,
    )
    .await?;
    let tanaka = ensure(
        store.crew(),
        CrewMember::from_create(officer_tanaka(explorer.id, now), now),
        &mut summary,
    )
    .await?;

    let mut transatlantic = Voyage::from_create(
        miami_rotterdam(explorer.id, vec![smith.id, tanaka.id], now),
        now,
    );
    // Historical track points are written directly; the API only appends.
    transatlantic.route.push(RoutePoint {
        latitude: 25.7617,
        longitude: -80.1918,
        timestamp: now - Duration::days(2),
    });
    transatlantic.route.push(RoutePoint {
        latitude: 28.5383,
        longitude: -70.5383,
        timestamp: now - Duration::days(1),
    });
    ensure(store.voyages(), transatlantic, &mut summary).await?;

    ensure(
        store.voyages(),
        Voyage::from_create(newyork_singapore(star.id, now), now),
        &mut summary,
    )
    .await?;

    ensure(
        store.maintenance(),
        MaintenanceRecord::from_create(engine_overhaul(voyager.id, now), now),
        &mut summary,
    )
    .await?;
    ensure(
        store.maintenance(),
        MaintenanceRecord::from_create(hull_inspection(explorer.id, now), now),
        &mut summary,
    )
    .await?;

    info!(
        inserted = summary.inserted,
        skipped = summary.skipped,
        "seeded sample fleet"
    );
    Ok(summary)
}

fn ocean_explorer(now: DateTime<Utc>) -> CreateVesselRequest {
    CreateVesselRequest {
        vessel_id: "V001".to_string(),
        name: "Ocean Explorer".to_string(),
        vessel_type: "Container Ship".to_string(),
        flag: "Panama".to_string(),
        year_built: 2018,
        gross_tonnage: 85_000.0,
        length: 300.0,
        beam: 40.0,
        draft: 14.5,
        status: VesselStatus::Active,
        current_location: Location {
            latitude: 25.7617,
            longitude: -80.1918,
            port_name: Some("Port of Miami".to_string()),
        },
        last_maintenance: Some(now - Duration::days(90)),
        next_scheduled_maintenance: now + Duration::days(20),
    }
}

fn northern_star(now: DateTime<Utc>) -> CreateVesselRequest {
    CreateVesselRequest {
        vessel_id: "V002".to_string(),
        name: "Northern Star".to_string(),
        vessel_type: "Bulk Carrier".to_string(),
        flag: "Liberia".to_string(),
        year_built: 2015,
        gross_tonnage: 65_000.0,
        length: 250.0,
        beam: 35.0,
        draft: 12.8,
        status: VesselStatus::Active,
        current_location: Location {
            latitude: 40.7128,
            longitude: -74.0060,
            port_name: Some("Port of New York".to_string()),
        },
        last_maintenance: Some(now - Duration::days(60)),
        next_scheduled_maintenance: now + Duration::days(50),
    }
}

fn pacific_voyager(now: DateTime<Utc>) -> CreateVesselRequest {
    CreateVesselRequest {
        vessel_id: "V003".to_string(),
        name: "Pacific Voyager".to_string(),
        vessel_type: "Tanker".to_string(),
        flag: "Marshall Islands".to_string(),
        year_built: 2020,
        gross_tonnage: 95_000.0,
        length: 320.0,
        beam: 45.0,
        draft: 15.2,
        status: VesselStatus::Maintenance,
        current_location: Location {
            latitude: 37.8044,
            longitude: -122.2711,
            port_name: Some("Port of Oakland".to_string()),
        },
        last_maintenance: Some(now - Duration::days(10)),
        next_scheduled_maintenance: now + Duration::days(25),
    }
}

fn captain_smith(vessel: Uuid, now: DateTime<Utc>) -> CreateCrewRequest {
    CreateCrewRequest {
        crew_id: "C001".to_string(),
        first_name: "John".to_string(),
        last_name: "Smith".to_string(),
        position: "Captain".to_string(),
        nationality: "American".to_string(),
        date_of_birth: now - Duration::days(45 * 365),
        license_number: "LIC123456".to_string(),
        license_expiry: now + Duration::days(400),
        contact_number: "+1-555-123-4567".to_string(),
        email: "john.smith@example.com".to_string(),
        current_vessel: Some(vessel),
        certifications: vec![Certification {
            name: "Master Mariner".to_string(),
            issued_date: now - Duration::days(10 * 365),
            expiry_date: now + Duration::days(25),
        }],
        status: CrewStatus::Active,
        join_date: now - Duration::days(3 * 365),
        contract_end_date: now + Duration::days(365),
    }
}

fn chief_rodriguez(vessel: Uuid, now: DateTime<Utc>) -> CreateCrewRequest {
    CreateCrewRequest {
        crew_id: "C002".to_string(),
        first_name: "Maria".to_string(),
        last_name: "Rodriguez".to_string(),
        position: "Chief Engineer".to_string(),
        nationality: "Spanish".to_string(),
        date_of_birth: now - Duration::days(40 * 365),
        license_number: "LIC789012".to_string(),
        license_expiry: now + Duration::days(700),
        contact_number: "+34-555-678-9012".to_string(),
        email: "maria.rodriguez@example.com".to_string(),
        current_vessel: Some(vessel),
        certifications: vec![Certification {
            name: "Chief Engineer License".to_string(),
            issued_date: now - Duration::days(9 * 365),
            expiry_date: now + Duration::days(300),
        }],
        status: CrewStatus::Active,
        join_date: now - Duration::days(4 * 365),
        contract_end_date: now + Duration::days(200),
    }
}

fn officer_tanaka(vessel: Uuid, now: DateTime<Utc>) -> CreateCrewRequest {
    CreateCrewRequest {
        crew_id: "C003".to_string(),
        first_name: "Hiroshi".to_string(),
        last_name: "Tanaka".to_string(),
        position: "First Officer".to_string(),
        nationality: "Japanese".to_string(),
        date_of_birth: now - Duration::days(37 * 365),
        license_number: "LIC345678".to_string(),
        license_expiry: now + Duration::days(500),
        contact_number: "+81-555-234-5678".to_string(),
        email: "hiroshi.tanaka@example.com".to_string(),
        current_vessel: Some(vessel),
        certifications: vec![Certification {
            name: "Navigation Officer".to_string(),
            issued_date: now - Duration::days(8 * 365),
            expiry_date: now + Duration::days(600),
        }],
        status: CrewStatus::Active,
        join_date: now - Duration::days(2 * 365),
        contract_end_date: now + Duration::days(500),
    }
}

fn miami_rotterdam(vessel: Uuid, crew: Vec<Uuid>, now: DateTime<Utc>) -> CreateVoyageRequest {
    CreateVoyageRequest {
        voyage_id: "VOY001".to_string(),
        vessel,
        departure_port: "Port of Miami".to_string(),
        destination_port: "Port of Rotterdam".to_string(),
        departure_time: now - Duration::days(2),
        estimated_arrival: now + Duration::days(12),
        actual_arrival: None,
        status: VoyageStatus::InProgress,
        cargo: Cargo {
            cargo_type: "Mixed Containers".to_string(),
            weight: 45_000.0,
            description: "Various consumer goods and electronics".to_string(),
        },
        fuel_consumption: None,
        distance: None,
        crew,
    }
}

fn newyork_singapore(vessel: Uuid, now: DateTime<Utc>) -> CreateVoyageRequest {
    CreateVoyageRequest {
        voyage_id: "VOY002".to_string(),
        vessel,
        departure_port: "Port of New York".to_string(),
        destination_port: "Port of Singapore".to_string(),
        departure_time: now + Duration::days(7),
        estimated_arrival: now + Duration::days(33),
        actual_arrival: None,
        status: VoyageStatus::Planned,
        cargo: Cargo {
            cargo_type: "Bulk Grain".to_string(),
            weight: 55_000.0,
            description: "Wheat and corn exports".to_string(),
        },
        fuel_consumption: None,
        distance: None,
        crew: Vec::new(),
    }
}

fn engine_overhaul(vessel: Uuid, now: DateTime<Utc>) -> CreateMaintenanceRequest {
    CreateMaintenanceRequest {
        maintenance_id: "M001".to_string(),
        vessel,
        maintenance_type: MaintenanceType::Scheduled,
        description: "Complete overhaul of main engine".to_string(),
        scheduled_date: now + Duration::days(25),
        completed_date: None,
        status: MaintenanceStatus::Scheduled,
        assigned_technicians: vec!["Tech1".to_string(), "Tech2".to_string()],
        parts: vec![
            Part {
                name: "Piston Rings".to_string(),
                quantity: 16,
                cost: 2_400.0,
            },
            Part {
                name: "Cylinder Liner".to_string(),
                quantity: 8,
                cost: 6_000.0,
            },
        ],
        total_cost: Some(8_400.0),
        notes: Some("Regular maintenance as per manufacturer guidelines".to_string()),
    }
}

fn hull_inspection(vessel: Uuid, now: DateTime<Utc>) -> CreateMaintenanceRequest {
    CreateMaintenanceRequest {
        maintenance_id: "M002".to_string(),
        vessel,
        maintenance_type: MaintenanceType::Inspection,
        description: "Regular hull inspection and cleaning".to_string(),
        scheduled_date: now + Duration::days(20),
        completed_date: None,
        status: MaintenanceStatus::Scheduled,
        assigned_technicians: vec!["Tech3".to_string()],
        parts: Vec::new(),
        total_cost: None,
        notes: Some("Underwater inspection by certified divers".to_string()),
    }
}
