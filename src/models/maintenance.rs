//! Maintenance model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::asset::AssetSummary;

/// Logged service event for a hardware asset
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Maintenance {
    pub id: i32,
    pub asset_id: i32,
    pub service_date: NaiveDate,
    pub technician: String,
    pub description: String,
    pub next_service_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Maintenance joined with its asset
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceWithAsset {
    #[serde(flatten)]
    pub maintenance: Maintenance,
    pub hardware_asset: Option<AssetSummary>,
}

/// Create maintenance request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMaintenance {
    pub asset_id: i32,
    pub service_date: NaiveDate,
    #[validate(length(min = 1, max = 100, message = "Technician is required"))]
    pub technician: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Must be after service_date when present
    pub next_service_date: Option<NaiveDate>,
}

/// Update maintenance request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMaintenance {
    pub asset_id: i32,
    pub service_date: NaiveDate,
    #[validate(length(min = 1, max = 100, message = "Technician is required"))]
    pub technician: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub next_service_date: Option<NaiveDate>,
}
