//! Storage trait definitions for the API storage backends.

use crate::models::{CrewMember, Document, MaintenanceRecord, Vessel, VesselStatus, Voyage};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::StorageError;

/// One stored collection of records, keyed by business id.
///
/// Backends implement this once, generically over the document type; the
/// per-entity differences live in [`FleetStore`].
#[async_trait::async_trait]
pub trait Collection<D: Document>: Send + Sync {
    /// All records, arbitrary order.
    async fn find_all(&self) -> Result<Vec<D>, StorageError>;

    /// Lookup by business id.
    async fn find_by_business_id(&self, id: &str) -> Result<Option<D>, StorageError>;

    /// Lookup by storage-internal record id (reference resolution).
    async fn find_by_record_id(&self, id: Uuid) -> Result<Option<D>, StorageError>;

    /// Insert a new record. Fails with [`StorageError::Duplicate`] if the
    /// business id is already taken.
    async fn insert(&self, doc: D) -> Result<D, StorageError>;

    /// Replace the record currently stored under `id` with `doc`.
    ///
    /// `doc` may carry a different business id (rename); the record is
    /// re-keyed and renaming onto a taken id fails with
    /// [`StorageError::Duplicate`]. Returns `None` when `id` is unknown.
    async fn replace(&self, id: &str, doc: D) -> Result<Option<D>, StorageError>;

    /// Delete by business id. Returns whether a record was removed.
    async fn delete(&self, id: &str) -> Result<bool, StorageError>;

    /// Remove every record in the collection.
    async fn clear(&self) -> Result<(), StorageError>;
}

/// The storage handle shared by all request handlers.
///
/// Exposes the four entity collections plus the lookups that need backend
/// support, including the atomic route-point append.
#[async_trait::async_trait]
pub trait FleetStore: Send + Sync {
    fn vessels(&self) -> &dyn Collection<Vessel>;
    fn crew(&self) -> &dyn Collection<CrewMember>;
    fn voyages(&self) -> &dyn Collection<Voyage>;
    fn maintenance(&self) -> &dyn Collection<MaintenanceRecord>;

    /// Vessels whose status matches exactly.
    async fn vessels_by_status(&self, status: VesselStatus) -> Result<Vec<Vessel>, StorageError>;

    /// Crew currently assigned to the given vessel record id.
    async fn crew_by_vessel(&self, vessel: Uuid) -> Result<Vec<CrewMember>, StorageError>;

    /// Crew whose license or any certification expires at or before
    /// `cutoff`. Already-expired records are included.
    async fn crew_with_expiring_certifications(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<CrewMember>, StorageError>;

    /// Voyages referencing the given vessel record id.
    async fn voyages_by_vessel(&self, vessel: Uuid) -> Result<Vec<Voyage>, StorageError>;

    /// Maintenance records referencing the given vessel record id.
    async fn maintenance_by_vessel(
        &self,
        vessel: Uuid,
    ) -> Result<Vec<MaintenanceRecord>, StorageError>;

    /// Maintenance scheduled within `[from, to]` and still in the
    /// Scheduled or Delayed state.
    async fn maintenance_upcoming(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<MaintenanceRecord>, StorageError>;

    /// Append one route point to a voyage's track log as a single atomic
    /// mutation. Concurrent appends to the same voyage must all land.
    /// Returns the updated voyage, or `None` when the id is unknown.
    async fn append_route_point(
        &self,
        voyage_id: &str,
        latitude: f64,
        longitude: f64,
        at: DateTime<Utc>,
    ) -> Result<Option<Voyage>, StorageError>;

    /// Release backend resources. Called once on shutdown.
    async fn close(&self) {}
}
