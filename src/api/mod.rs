// API module organization
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod services;
pub mod storage;
