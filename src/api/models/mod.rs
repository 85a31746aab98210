// Models module - the four fleet entities, their enums, and the Document trait

pub mod crew;
pub mod document;
pub mod enums;
pub mod maintenance;
pub mod vessel;
pub mod voyage;

pub use crew::{Certification, CreateCrewRequest, CrewMember, UpdateCrewRequest};
pub use document::Document;
pub use enums::{CrewStatus, MaintenanceStatus, MaintenanceType, VesselStatus, VoyageStatus};
pub use maintenance::{
    CreateMaintenanceRequest, MaintenanceRecord, Part, UpdateMaintenanceRequest,
};
pub use vessel::{CreateVesselRequest, Location, UpdateVesselRequest, Vessel};
pub use voyage::{Cargo, CreateVoyageRequest, RoutePoint, UpdateVoyageRequest, Voyage};
