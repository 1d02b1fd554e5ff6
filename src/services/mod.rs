//! Business logic services

pub mod areas;
pub mod assets;
pub mod backup;
pub mod dashboard;
pub mod documents;
pub mod export;
pub mod maintenances;
pub mod pc_details;

use crate::{
    config::{DatabaseConfig, StorageConfig},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub areas: areas::AreasService,
    pub assets: assets::AssetsService,
    pub pc_details: pc_details::PcDetailsService,
    pub maintenances: maintenances::MaintenancesService,
    pub documents: documents::DocumentsService,
    pub export: export::ExportService,
    pub backup: backup::BackupService,
    pub dashboard: dashboard::DashboardService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(
        repository: Repository,
        database_config: DatabaseConfig,
        storage_config: StorageConfig,
    ) -> Self {
        Self {
            areas: areas::AreasService::new(repository.clone()),
            assets: assets::AssetsService::new(repository.clone()),
            pc_details: pc_details::PcDetailsService::new(repository.clone()),
            maintenances: maintenances::MaintenancesService::new(repository.clone()),
            documents: documents::DocumentsService::new(repository.clone(), storage_config.clone()),
            export: export::ExportService::new(repository.clone()),
            backup: backup::BackupService::new(repository.clone(), database_config, storage_config),
            dashboard: dashboard::DashboardService::new(repository),
        }
    }
}
