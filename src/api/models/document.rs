//! Common behavior shared by all stored entity types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// A stored entity with a caller-assigned business id and server-assigned
/// record id and timestamps.
///
/// The generic CRUD layer and the storage collections are parameterized over
/// this trait, so each entity type only declares its payload types and how
/// they map onto the stored record.
pub trait Document: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Display name used in error messages ("Vessel not found").
    const KIND: &'static str;
    /// Backing collection/table name.
    const COLLECTION: &'static str;

    /// Typed request body for creation.
    type Create: DeserializeOwned + Send + 'static;
    /// Typed request body for partial update. Absent fields are unchanged.
    type Update: DeserializeOwned + Send + 'static;

    /// Build a new record from a creation payload with server-assigned
    /// record id and timestamps.
    fn from_create(request: Self::Create, now: DateTime<Utc>) -> Self;

    /// Apply the provided fields of a partial update in place.
    fn apply_update(&mut self, patch: Self::Update);

    /// Storage-internal id, the target of weak references.
    fn record_id(&self) -> Uuid;

    /// Caller-assigned unique id, used in all API paths.
    fn business_id(&self) -> &str;

    /// The weak Vessel reference carried by this record, if any.
    fn vessel_ref(&self) -> Option<Uuid>;

    /// Bump the modification timestamp.
    fn touch(&mut self, now: DateTime<Utc>);
}
