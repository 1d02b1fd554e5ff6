//! Hardware assets service

use crate::{
    error::AppResult,
    models::asset::{AssetQuery, AssetWithArea, CreateAsset, HardwareAsset, UpdateAsset},
    repository::Repository,
};

#[derive(Clone)]
pub struct AssetsService {
    repository: Repository,
}

impl AssetsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &AssetQuery) -> AppResult<Vec<AssetWithArea>> {
        self.repository.assets.list(query).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<AssetWithArea> {
        self.repository.assets.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateAsset) -> AppResult<HardwareAsset> {
        self.repository.assets.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateAsset) -> AppResult<HardwareAsset> {
        self.repository.assets.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.assets.delete(id).await
    }
}
