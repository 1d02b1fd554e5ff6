//! Hardware asset model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::area::AreaSummary;
use super::enums::{AssetStatus, AssetType};

/// Hardware asset record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct HardwareAsset {
    pub id: i32,
    pub uuid: Uuid,
    pub asset_type: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub status: String,
    pub area_id: Option<i32>,
    pub description: Option<String>,
    pub acquired_on: Option<NaiveDate>,
    pub warranty_until: Option<NaiveDate>,
    pub needs_maintenance: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Asset with its (optional) area, as returned by list/get endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssetWithArea {
    #[serde(flatten)]
    pub asset: HardwareAsset,
    pub area: Option<AreaSummary>,
}

/// Short asset reference (selection lists, nested payloads)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AssetSummary {
    pub id: i32,
    pub asset_type: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
}

/// Create asset request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAsset {
    #[validate(custom(function = "validate_asset_type"))]
    pub asset_type: String,
    #[validate(length(min = 1, max = 255, message = "Brand is required"))]
    pub brand: String,
    #[validate(length(min = 1, max = 255, message = "Model is required"))]
    pub model: String,
    #[validate(length(min = 1, max = 255, message = "Serial number is required"))]
    pub serial_number: String,
    #[validate(custom(function = "validate_asset_status"))]
    pub status: String,
    pub area_id: Option<i32>,
    pub description: Option<String>,
    pub acquired_on: Option<NaiveDate>,
    pub warranty_until: Option<NaiveDate>,
    #[serde(default)]
    pub needs_maintenance: bool,
}

/// Update asset request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAsset {
    #[validate(custom(function = "validate_asset_type"))]
    pub asset_type: String,
    #[validate(length(min = 1, max = 255, message = "Brand is required"))]
    pub brand: String,
    #[validate(length(min = 1, max = 255, message = "Model is required"))]
    pub model: String,
    #[validate(length(min = 1, max = 255, message = "Serial number is required"))]
    pub serial_number: String,
    #[validate(custom(function = "validate_asset_status"))]
    pub status: String,
    pub area_id: Option<i32>,
    pub description: Option<String>,
    pub acquired_on: Option<NaiveDate>,
    pub warranty_until: Option<NaiveDate>,
    #[serde(default)]
    pub needs_maintenance: bool,
}

/// Asset query parameters (type / status filters)
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct AssetQuery {
    pub asset_type: Option<String>,
    pub status: Option<String>,
}

fn validate_asset_type(value: &str) -> Result<(), ValidationError> {
    if AssetType::parse(value).is_some() {
        Ok(())
    } else {
        let mut error = ValidationError::new("asset_type");
        error.message = Some("Unknown asset type".into());
        Err(error)
    }
}

fn validate_asset_status(value: &str) -> Result<(), ValidationError> {
    if AssetStatus::parse(value).is_some() {
        Ok(())
    } else {
        let mut error = ValidationError::new("status");
        error.message = Some("Unknown asset status".into());
        Err(error)
    }
}
