//! Application state management.
//!
//! Defines the AppState struct that holds the storage handle shared by all
//! route handlers and owns its lifecycle: connect and migrate on startup,
//! close on shutdown.

use crate::storage::{FleetStore, MemoryStore, PgStore, StorageError};
use std::sync::Arc;

/// Application state shared across all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// Storage backend for all fleet collections.
    pub store: Arc<dyn FleetStore>,
}

impl AppState {
    /// State backed by the in-memory store. Used by tests and by local runs
    /// without a database.
    pub fn in_memory() -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
        }
    }

    /// Initialize storage from environment configuration.
    ///
    /// Connects to PostgreSQL and runs migrations when DATABASE_URL is set,
    /// otherwise falls back to the in-memory store.
    pub async fn from_env() -> Result<Self, StorageError> {
        let Ok(database_url) = std::env::var("DATABASE_URL") else {
            return Ok(Self::in_memory());
        };

        let pool = sqlx::PgPool::connect(&database_url).await.map_err(|e| {
            StorageError::Connection(format!("failed to connect to database: {e}"))
        })?;
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| StorageError::Connection(format!("migration failed: {e}")))?;

        Ok(Self {
            store: Arc::new(PgStore::new(pool)),
        })
    }

    /// Release the underlying storage connections.
    pub async fn close(&self) {
        self.store.close().await;
    }
}
