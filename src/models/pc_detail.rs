//! PC detail model (technical specification record)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::area::AreaSummary;

/// PC specification record, one per compatible hardware asset
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PcDetail {
    pub id: i32,
    pub asset_id: i32,
    pub cpu: Option<String>,
    pub ram_gb: Option<i32>,
    pub storage: Option<String>,
    pub os: Option<String>,
    pub mac_address: Option<String>,
    pub ip_address: Option<String>,
    pub anydesk_id: Option<String>,
    pub teamviewer_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Asset reference carried inside detail payloads (with its own area)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DetailAsset {
    pub id: i32,
    pub asset_type: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub status: String,
    pub area: Option<AreaSummary>,
}

/// Detail joined with its asset, as listed and as handed to the report view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PcDetailWithAsset {
    #[serde(flatten)]
    pub detail: PcDetail,
    pub hardware_asset: Option<DetailAsset>,
}

/// Create PC detail request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePcDetail {
    pub asset_id: i32,
    #[validate(length(min = 1, max = 100, message = "CPU is required"))]
    pub cpu: String,
    #[validate(range(min = 1, message = "RAM must be at least 1 GB"))]
    pub ram_gb: i32,
    #[validate(length(min = 1, max = 100, message = "Storage is required"))]
    pub storage: String,
    #[validate(length(min = 1, max = 100, message = "Operating system is required"))]
    pub os: String,
    #[validate(length(max = 100))]
    pub mac_address: Option<String>,
    #[validate(length(max = 45))]
    pub ip_address: Option<String>,
    #[validate(length(max = 50))]
    pub anydesk_id: Option<String>,
    #[validate(length(max = 50))]
    pub teamviewer_id: Option<String>,
}

/// Update PC detail request (the owning asset is not reassignable)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePcDetail {
    #[validate(length(min = 1, max = 100, message = "CPU is required"))]
    pub cpu: String,
    #[validate(range(min = 1, message = "RAM must be at least 1 GB"))]
    pub ram_gb: i32,
    #[validate(length(min = 1, max = 100, message = "Storage is required"))]
    pub storage: String,
    #[validate(length(min = 1, max = 100, message = "Operating system is required"))]
    pub os: String,
    #[validate(length(max = 100))]
    pub mac_address: Option<String>,
    #[validate(length(max = 45))]
    pub ip_address: Option<String>,
    #[validate(length(max = 50))]
    pub anydesk_id: Option<String>,
    #[validate(length(max = 50))]
    pub teamviewer_id: Option<String>,
}
