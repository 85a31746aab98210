// API module for the Rust backend
pub mod api;

// Re-export api modules at crate root so binaries and tests can use
// crate::models, crate::routes and friends directly
pub use api::middleware;
pub use api::models;
pub use api::openapi;
pub use api::routes;
pub use api::services;
pub use api::storage;
