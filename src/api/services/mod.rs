//! Services module - reference resolution and sample data seeding.

pub mod reference_service;
pub mod seed_service;

// Re-export for convenience
pub use reference_service::{
    CrewMemberView, CrewSummary, MaintenanceView, VesselSummary, VoyageView,
};
pub use seed_service::{seed_fleet, SeedSummary};
