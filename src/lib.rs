//! Inventario - IT Hardware Asset Inventory & Maintenance Server
//!
//! A Rust implementation of the Inventario asset-tracking server,
//! providing a REST JSON API for managing hardware assets, areas,
//! PC specifications, maintenance logs and documents.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
