//! PostgreSQL storage backend.
//!
//! Stores each entity as a JSONB document in a uniform table (see the
//! migrations directory): the business id and the vessel reference are
//! extracted into indexed columns, everything else lives in `data`.
//! Duplicate business ids surface as unique-constraint violations, and
//! the route-point append is one UPDATE so concurrent appends cannot
//! lose points.

use super::StorageError;
use super::traits::{Collection, FleetStore};
use crate::models::{
    CrewMember, Document, MaintenanceRecord, RoutePoint, Vessel, VesselStatus, Voyage,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::marker::PhantomData;
use uuid::Uuid;

fn decode<D: Document>(row: PgRow) -> Result<D, StorageError> {
    let data: serde_json::Value = row.try_get("data")?;
    Ok(serde_json::from_value(data)?)
}

fn duplicate_or_db(err: sqlx::Error, kind: &'static str, id: &str) -> StorageError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StorageError::Duplicate {
            kind,
            id: id.to_string(),
        },
        _ => StorageError::Database(err),
    }
}

/// One JSONB document table. The table name comes from the document type.
pub struct PgCollection<D: Document> {
    pool: PgPool,
    _marker: PhantomData<fn() -> D>,
}

impl<D: Document> PgCollection<D> {
    fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<D: Document> Collection<D> for PgCollection<D> {
    async fn find_all(&self) -> Result<Vec<D>, StorageError> {
        let sql = format!("SELECT data FROM {}", D::COLLECTION);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.into_iter().map(decode).collect()
    }

    async fn find_by_business_id(&self, id: &str) -> Result<Option<D>, StorageError> {
        let sql = format!("SELECT data FROM {} WHERE business_id = $1", D::COLLECTION);
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.map(decode).transpose()
    }

    async fn find_by_record_id(&self, id: Uuid) -> Result<Option<D>, StorageError> {
        let sql = format!("SELECT data FROM {} WHERE id = $1", D::COLLECTION);
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.map(decode).transpose()
    }

    async fn insert(&self, doc: D) -> Result<D, StorageError> {
        let data = serde_json::to_value(&doc)?;
        let sql = format!(
            "INSERT INTO {} (id, business_id, vessel_ref, data) VALUES ($1, $2, $3, $4)",
            D::COLLECTION
        );
        sqlx::query(&sql)
            .bind(doc.record_id())
            .bind(doc.business_id())
            .bind(doc.vessel_ref())
            .bind(&data)
            .execute(&self.pool)
            .await
            .map_err(|e| duplicate_or_db(e, D::KIND, doc.business_id()))?;
        Ok(doc)
    }

    async fn replace(&self, id: &str, doc: D) -> Result<Option<D>, StorageError> {
        let data = serde_json::to_value(&doc)?;
        let sql = format!(
            "UPDATE {} SET business_id = $2, vessel_ref = $3, data = $4 WHERE business_id = $1",
            D::COLLECTION
        );
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(doc.business_id())
            .bind(doc.vessel_ref())
            .bind(&data)
            .execute(&self.pool)
            .await
            .map_err(|e| duplicate_or_db(e, D::KIND, doc.business_id()))?;
        if result.rows_affected() == 0 {
            Ok(None)
        } else {
            Ok(Some(doc))
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, StorageError> {
        let sql = format!("DELETE FROM {} WHERE business_id = $1", D::COLLECTION);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let sql = format!("DELETE FROM {}", D::COLLECTION);
        sqlx::query(&sql).execute(&self.pool).await?;
        Ok(())
    }
}

/// PostgreSQL implementation of the full storage handle.
pub struct PgStore {
    pool: PgPool,
    vessels: PgCollection<Vessel>,
    crew: PgCollection<CrewMember>,
    voyages: PgCollection<Voyage>,
    maintenance: PgCollection<MaintenanceRecord>,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vessels: PgCollection::new(pool.clone()),
            crew: PgCollection::new(pool.clone()),
            voyages: PgCollection::new(pool.clone()),
            maintenance: PgCollection::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl FleetStore for PgStore {
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
        let rows = sqlx::query("SELECT data FROM vessels WHERE data->>'status' = $1")
            .bind(status.as_str())
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(decode).collect()
    }

    async fn crew_by_vessel(&self, vessel: Uuid) -> Result<Vec<CrewMember>, StorageError> {
        let rows = sqlx::query("SELECT data FROM crew WHERE vessel_ref = $1")
            .bind(vessel)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(decode).collect()
    }

    async fn crew_with_expiring_certifications(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<CrewMember>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT data FROM crew
            WHERE (data->>'licenseExpiry')::timestamptz <= $1
               OR EXISTS (
                    SELECT 1 FROM jsonb_array_elements(data->'certifications') AS cert
                    WHERE (cert->>'expiryDate')::timestamptz <= $1
               )
            "#,
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(decode).collect()
    }

    async fn voyages_by_vessel(&self, vessel: Uuid) -> Result<Vec<Voyage>, StorageError> {
        let rows = sqlx::query("SELECT data FROM voyages WHERE vessel_ref = $1")
            .bind(vessel)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(decode).collect()
    }

    async fn maintenance_by_vessel(
        &self,
        vessel: Uuid,
    ) -> Result<Vec<MaintenanceRecord>, StorageError> {
        let rows = sqlx::query("SELECT data FROM maintenance WHERE vessel_ref = $1")
            .bind(vessel)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(decode).collect()
    }

    async fn maintenance_upcoming(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<MaintenanceRecord>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT data FROM maintenance
            WHERE (data->>'scheduledDate')::timestamptz BETWEEN $1 AND $2
              AND data->>'status' IN ('Scheduled', 'Delayed')
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(decode).collect()
    }

    async fn append_route_point(
        &self,
        voyage_id: &str,
        latitude: f64,
        longitude: f64,
        at: DateTime<Utc>,
    ) -> Result<Option<Voyage>, StorageError> {
        let point = serde_json::to_value(RoutePoint {
            latitude,
            longitude,
            timestamp: at,
        })?;
        let stamp = serde_json::to_value(at)?;
        let row = sqlx::query(
            r#"
            UPDATE voyages
            SET data = jsonb_set(
                    jsonb_set(data, '{route}', COALESCE(data->'route', '[]'::jsonb) || $2::jsonb),
                    '{updatedAt}',
                    $3::jsonb
                )
            WHERE business_id = $1
            RETURNING data
            "#,
        )
        .bind(voyage_id)
        .bind(&point)
        .bind(&stamp)
        .fetch_optional(&self.pool)
        .await?;
        row.map(decode).transpose()
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
