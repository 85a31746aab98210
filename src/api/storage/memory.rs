//! In-memory storage backend.
//!
//! Default backend when no DATABASE_URL is configured; also used by the
//! test suite. Each collection is a map from business id to document
//! behind its own RwLock, so the route-point append is a single guarded
//! mutation rather than a read-modify-write across lock acquisitions.

use super::StorageError;
use super::traits::{Collection, FleetStore};
use crate::models::{
    CrewMember, Document, MaintenanceRecord, MaintenanceStatus, RoutePoint, Vessel, VesselStatus,
    Voyage,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// One in-memory collection, keyed by business id.
pub struct MemoryCollection<D: Document> {
    records: RwLock<HashMap<String, D>>,
}

impl<D: Document> MemoryCollection<D> {
    fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl<D: Document> Collection<D> for MemoryCollection<D> {
    async fn find_all(&self) -> Result<Vec<D>, StorageError> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn find_by_business_id(&self, id: &str) -> Result<Option<D>, StorageError> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn find_by_record_id(&self, id: Uuid) -> Result<Option<D>, StorageError> {
        let records = self.records.read().await;
        Ok(records.values().find(|doc| doc.record_id() == id).cloned())
    }

    async fn insert(&self, doc: D) -> Result<D, StorageError> {
        let mut records = self.records.write().await;
        if records.contains_key(doc.business_id()) {
            return Err(StorageError::Duplicate {
                kind: D::KIND,
                id: doc.business_id().to_string(),
            });
        }
        records.insert(doc.business_id().to_string(), doc.clone());
        Ok(doc)
    }

    async fn replace(&self, id: &str, doc: D) -> Result<Option<D>, StorageError> {
        let mut records = self.records.write().await;
        if !records.contains_key(id) {
            return Ok(None);
        }
        // Business-id rename must not land on another record's key.
        if doc.business_id() != id && records.contains_key(doc.business_id()) {
            return Err(StorageError::Duplicate {
                kind: D::KIND,
                id: doc.business_id().to_string(),
            });
        }
        records.remove(id);
        records.insert(doc.business_id().to_string(), doc.clone());
        Ok(Some(doc))
    }

    async fn delete(&self, id: &str) -> Result<bool, StorageError> {
        let mut records = self.records.write().await;
        Ok(records.remove(id).is_some())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut records = self.records.write().await;
        records.clear();
        Ok(())
    }
}

/// In-memory implementation of the full storage handle.
pub struct MemoryStore {
    vessels: MemoryCollection<Vessel>,
    crew: MemoryCollection<CrewMember>,
    voyages: MemoryCollection<Voyage>,
    maintenance: MemoryCollection<MaintenanceRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            vessels: MemoryCollection::new(),
            crew: MemoryCollection::new(),
            voyages: MemoryCollection::new(),
            maintenance: MemoryCollection::new(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FleetStore for MemoryStore {
    fn vessels(&self) -> &dyn Collection<Vessel> {
        &self.vessels
    }

    fn crew(&self) -> &dyn Collection<CrewMember> {
        &self.crew
    }

    fn voyages(&self) -> &dyn Collection<Voyage> {
        &self.voyages
    }

    fn maintenance(&self) -> &dyn Collection<MaintenanceRecord> {
        &self.maintenance
    }

    async fn vessels_by_status(&self, status: VesselStatus) -> Result<Vec<Vessel>, StorageError> {
        let records = self.vessels.records.read().await;
        Ok(records
            .values()
            .filter(|vessel| vessel.status == status)
            .cloned()
            .collect())
    }

    async fn crew_by_vessel(&self, vessel: Uuid) -> Result<Vec<CrewMember>, StorageError> {
        let records = self.crew.records.read().await;
        Ok(records
            .values()
            .filter(|member| member.current_vessel == Some(vessel))
            .cloned()
            .collect())
    }

    async fn crew_with_expiring_certifications(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<CrewMember>, StorageError> {
        let records = self.crew.records.read().await;
        Ok(records
            .values()
            .filter(|member| {
                member.license_expiry <= cutoff
                    || member
                        .certifications
                        .iter()
                        .any(|cert| cert.expiry_date <= cutoff)
            })
            .cloned()
            .collect())
    }

    async fn voyages_by_vessel(&self, vessel: Uuid) -> Result<Vec<Voyage>, StorageError> {
        let records = self.voyages.records.read().await;
        Ok(records
            .values()
            .filter(|voyage| voyage.vessel == vessel)
            .cloned()
            .collect())
    }

    async fn maintenance_by_vessel(
        &self,
        vessel: Uuid,
    ) -> Result<Vec<MaintenanceRecord>, StorageError> {
        let records = self.maintenance.records.read().await;
        Ok(records
            .values()
            .filter(|record| record.vessel == vessel)
            .cloned()
            .collect())
    }

    async fn maintenance_upcoming(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<MaintenanceRecord>, StorageError> {
        let records = self.maintenance.records.read().await;
        Ok(records
            .values()
            .filter(|record| {
                record.scheduled_date >= from
                    && record.scheduled_date <= to
                    && matches!(
                        record.status,
                        MaintenanceStatus::Scheduled | MaintenanceStatus::Delayed
                    )
            })
            .cloned()
            .collect())
    }

    async fn append_route_point(
        &self,
        voyage_id: &str,
        latitude: f64,
        longitude: f64,
        at: DateTime<Utc>,
    ) -> Result<Option<Voyage>, StorageError> {
        let mut records = self.voyages.records.write().await;
        let Some(voyage) = records.get_mut(voyage_id) else {
            return Ok(None);
        };
        voyage.route.push(RoutePoint {
            latitude,
            longitude,
            timestamp: at,
        });
        voyage.touch(at);
        Ok(Some(voyage.clone()))
    }
}
