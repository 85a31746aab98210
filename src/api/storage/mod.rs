//! Storage module for the API.
//!
//! Provides an in-memory backend and a PostgreSQL JSONB backend behind a
//! common set of traits.

pub mod error;
pub mod traits;

// Storage backend implementations
pub mod memory;
pub mod postgres;

pub use error::StorageError;
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use traits::{Collection, FleetStore};
