//! API handlers for Inventario REST endpoints

pub mod areas;
pub mod assets;
pub mod backup;
pub mod dashboard;
pub mod documents;
pub mod health;
pub mod maintenances;
pub mod openapi;
pub mod pc_details;
