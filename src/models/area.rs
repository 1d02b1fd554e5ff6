//! Area model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Area record (a named physical or organizational location)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Area {
    pub id: i32,
    pub name: String,
    pub physical_location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Short area reference embedded in asset payloads
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AreaSummary {
    pub id: i32,
    pub name: String,
}

/// Create area request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateArea {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    pub physical_location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Update area request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateArea {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    pub physical_location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Area query parameters (search over name / physical location)
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct AreaQuery {
    pub search: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
