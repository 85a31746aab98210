//! Generic create/read/update/delete core shared by every entity router.
//!
//! Each entity router is a thin layer of path wiring and response shaping
//! over these functions; the lookup, patch and delete semantics live here
//! exactly once.

use super::error::{ApiError, MessageBody};
use crate::models::Document;
use crate::storage::Collection;
use chrono::Utc;

pub async fn list<D: Document>(collection: &dyn Collection<D>) -> Result<Vec<D>, ApiError> {
    Ok(collection.find_all().await?)
}

pub async fn fetch<D: Document>(collection: &dyn Collection<D>, id: &str) -> Result<D, ApiError> {
    collection
        .find_by_business_id(id)
        .await?
        .ok_or(ApiError::NotFound(D::KIND))
}

pub async fn create<D: Document>(
    collection: &dyn Collection<D>,
    request: D::Create,
) -> Result<D, ApiError> {
    let doc = D::from_create(request, Utc::now());
    Ok(collection.insert(doc).await?)
}

pub async fn update<D: Document>(
    collection: &dyn Collection<D>,
    id: &str,
    patch: D::Update,
) -> Result<D, ApiError> {
    mutate(collection, id, |doc| doc.apply_update(patch)).await
}

/// Read-modify-write under the original business id. The replace step keys
/// on `id`, so a mutation that renames the business id stays consistent.
pub async fn mutate<D, F>(
    collection: &dyn Collection<D>,
    id: &str,
    apply: F,
) -> Result<D, ApiError>
where
    D: Document,
    F: FnOnce(&mut D),
{
    let mut doc = fetch(collection, id).await?;
    apply(&mut doc);
    doc.touch(Utc::now());
    collection
        .replace(id, doc)
        .await?
        .ok_or(ApiError::NotFound(D::KIND))
}

pub async fn remove<D: Document>(
    collection: &dyn Collection<D>,
    id: &str,
) -> Result<MessageBody, ApiError> {
    if collection.delete(id).await? {
        Ok(MessageBody::new(format!("{} deleted successfully", D::KIND)))
    } else {
        Err(ApiError::NotFound(D::KIND))
    }
}
