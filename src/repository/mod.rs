//! Repository layer for database operations

pub mod areas;
pub mod assets;
pub mod documents;
pub mod maintenances;
pub mod pc_details;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub areas: areas::AreasRepository,
    pub assets: assets::AssetsRepository,
    pub pc_details: pc_details::PcDetailsRepository,
    pub maintenances: maintenances::MaintenancesRepository,
    pub documents: documents::DocumentsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            areas: areas::AreasRepository::new(pool.clone()),
            assets: assets::AssetsRepository::new(pool.clone()),
            pc_details: pc_details::PcDetailsRepository::new(pool.clone()),
            maintenances: maintenances::MaintenancesRepository::new(pool.clone()),
            documents: documents::DocumentsRepository::new(pool.clone()),
            pool,
        }
    }
}
