//! PC details service

use crate::{
    error::{AppError, AppResult},
    models::{
        asset::AssetSummary,
        enums::AssetType,
        pc_detail::{CreatePcDetail, PcDetail, PcDetailWithAsset, UpdatePcDetail},
    },
    repository::{pc_details::DetailOrder, Repository},
};

#[derive(Clone)]
pub struct PcDetailsService {
    repository: Repository,
}

impl PcDetailsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all details with their assets, newest-first
    pub async fn list(&self) -> AppResult<Vec<PcDetailWithAsset>> {
        self.repository
            .pc_details
            .list_with_assets(DetailOrder::IdDescending)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<PcDetailWithAsset> {
        self.repository.pc_details.get_by_id(id).await
    }

    /// Create a detail after checking the asset exists, is PC-compatible
    /// and does not already carry one.
    pub async fn create(&self, data: &CreatePcDetail) -> AppResult<PcDetail> {
        let asset_type = self
            .repository
            .assets
            .get_type(data.asset_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", data.asset_id)))?;

        let compatible = AssetType::parse(&asset_type)
            .map(|t| t.supports_pc_detail())
            .unwrap_or(false);
        if !compatible {
            return Err(AppError::Validation(format!(
                "Asset type {} cannot carry a PC detail",
                asset_type
            )));
        }

        if self
            .repository
            .pc_details
            .exists_for_asset(data.asset_id)
            .await?
        {
            return Err(AppError::Conflict("Asset already has a PC detail".to_string()));
        }

        self.repository.pc_details.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdatePcDetail) -> AppResult<PcDetail> {
        self.repository.pc_details.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.pc_details.delete(id).await
    }

    /// PC-compatible assets without a detail yet (for the create form)
    pub async fn available_assets(&self) -> AppResult<Vec<AssetSummary>> {
        let compatible: Vec<&str> = AssetType::ALL
            .iter()
            .filter(|t| t.supports_pc_detail())
            .map(|t| t.as_str())
            .collect();
        self.repository.pc_details.available_assets(&compatible).await
    }
}
