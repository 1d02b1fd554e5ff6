//! Document model (files attached to assets)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Stored document record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Document {
    pub id: i32,
    pub asset_id: i32,
    /// Name of the file on disk (uuid-based)
    pub filename: String,
    /// Name the file was uploaded with
    pub original_name: String,
    pub mime_type: String,
    pub size_bytes: i32,
    /// Path relative to the documents storage directory
    pub path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for inserting a new document record
#[derive(Debug, Clone, Deserialize)]
pub struct NewDocument {
    pub asset_id: i32,
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size_bytes: i32,
    pub path: String,
}
