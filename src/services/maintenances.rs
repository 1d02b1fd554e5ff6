//! Maintenances service

use crate::{
    error::{AppError, AppResult},
    models::maintenance::{
        CreateMaintenance, Maintenance, MaintenanceWithAsset, UpdateMaintenance,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct MaintenancesService {
    repository: Repository,
}

impl MaintenancesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<MaintenanceWithAsset>> {
        self.repository.maintenances.list_with_assets().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<MaintenanceWithAsset> {
        self.repository.maintenances.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateMaintenance) -> AppResult<Maintenance> {
        if let Some(next) = data.next_service_date {
            if next <= data.service_date {
                return Err(AppError::Validation(
                    "Next service date must be after the service date".to_string(),
                ));
            }
        }
        self.repository.maintenances.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateMaintenance) -> AppResult<Maintenance> {
        if let Some(next) = data.next_service_date {
            if next <= data.service_date {
                return Err(AppError::Validation(
                    "Next service date must be after the service date".to_string(),
                ));
            }
        }
        self.repository.maintenances.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.maintenances.delete(id).await
    }
}
