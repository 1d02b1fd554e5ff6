//! PC details repository for database operations

use sqlx::{FromRow, Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        area::AreaSummary,
        asset::AssetSummary,
        pc_detail::{CreatePcDetail, DetailAsset, PcDetail, PcDetailWithAsset, UpdatePcDetail},
    },
};

/// Ordering of the joined detail set. The CSV export walks newest-first,
/// the printable report oldest-first; both orders are part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOrder {
    IdAscending,
    IdDescending,
}

const DETAIL_JOIN_SELECT: &str = r#"
SELECT d.*,
       a.id AS a_id, a.asset_type AS a_type, a.brand AS a_brand,
       a.model AS a_model, a.serial_number AS a_serial, a.status AS a_status,
       a.area_id AS a_area_id, ar.name AS area_name
FROM pc_details d
LEFT JOIN hardware_assets a ON d.asset_id = a.id
LEFT JOIN areas ar ON a.area_id = ar.id
"#;

fn with_asset(row: &sqlx::postgres::PgRow) -> Result<PcDetailWithAsset, sqlx::Error> {
    let detail = PcDetail::from_row(row)?;
    let hardware_asset = match row.try_get::<Option<i32>, _>("a_id")? {
        Some(id) => {
            let area = match (
                row.try_get::<Option<i32>, _>("a_area_id")?,
                row.try_get::<Option<String>, _>("area_name")?,
            ) {
                (Some(area_id), Some(name)) => Some(AreaSummary { id: area_id, name }),
                _ => None,
            };
            Some(DetailAsset {
                id,
                asset_type: row.try_get("a_type")?,
                brand: row.try_get("a_brand")?,
                model: row.try_get("a_model")?,
                serial_number: row.try_get("a_serial")?,
                status: row.try_get("a_status")?,
                area,
            })
        }
        None => None,
    };
    Ok(PcDetailWithAsset {
        detail,
        hardware_asset,
    })
}

#[derive(Clone)]
pub struct PcDetailsRepository {
    pool: Pool<Postgres>,
}

impl PcDetailsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all details joined with their asset and the asset's area
    pub async fn list_with_assets(&self, order: DetailOrder) -> AppResult<Vec<PcDetailWithAsset>> {
        let sql = match order {
            DetailOrder::IdAscending => format!("{} ORDER BY d.id ASC", DETAIL_JOIN_SELECT),
            DetailOrder::IdDescending => format!("{} ORDER BY d.id DESC", DETAIL_JOIN_SELECT),
        };
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        let details = rows
            .iter()
            .map(with_asset)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(details)
    }

    /// Get detail by ID with its asset
    pub async fn get_by_id(&self, id: i32) -> AppResult<PcDetailWithAsset> {
        let sql = format!("{} WHERE d.id = $1", DETAIL_JOIN_SELECT);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("PC detail {} not found", id)))?;
        Ok(with_asset(&row)?)
    }

    /// Create detail. The asset_id unique constraint guards against a
    /// second specification for the same asset.
    pub async fn create(&self, data: &CreatePcDetail) -> AppResult<PcDetail> {
        let detail = sqlx::query_as::<_, PcDetail>(
            r#"
            INSERT INTO pc_details
                (asset_id, cpu, ram_gb, storage, os, mac_address, ip_address,
                 anydesk_id, teamviewer_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(data.asset_id)
        .bind(&data.cpu)
        .bind(data.ram_gb)
        .bind(&data.storage)
        .bind(&data.os)
        .bind(&data.mac_address)
        .bind(&data.ip_address)
        .bind(&data.anydesk_id)
        .bind(&data.teamviewer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("Asset already has a PC detail".to_string())
            }
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                AppError::BadRequest("Referenced asset does not exist".to_string())
            }
            _ => AppError::Database(e),
        })?;
        Ok(detail)
    }

    /// Update detail
    pub async fn update(&self, id: i32, data: &UpdatePcDetail) -> AppResult<PcDetail> {
        sqlx::query_as::<_, PcDetail>(
            r#"
            UPDATE pc_details
            SET cpu = $1, ram_gb = $2, storage = $3, os = $4, mac_address = $5,
                ip_address = $6, anydesk_id = $7, teamviewer_id = $8,
                updated_at = NOW()
            WHERE id = $9
            RETURNING *
            "#,
        )
        .bind(&data.cpu)
        .bind(data.ram_gb)
        .bind(&data.storage)
        .bind(&data.os)
        .bind(&data.mac_address)
        .bind(&data.ip_address)
        .bind(&data.anydesk_id)
        .bind(&data.teamviewer_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("PC detail {} not found", id)))
    }

    /// Delete detail
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM pc_details WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("PC detail {} not found", id)));
        }
        Ok(())
    }

    /// Whether an asset already has a detail record
    pub async fn exists_for_asset(&self, asset_id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM pc_details WHERE asset_id = $1)")
                .bind(asset_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// PC-compatible assets that do not have a detail yet (create form)
    pub async fn available_assets(&self, compatible_types: &[&str]) -> AppResult<Vec<AssetSummary>> {
        let assets = sqlx::query_as::<_, AssetSummary>(
            r#"
            SELECT a.id, a.asset_type, a.brand, a.model, a.serial_number
            FROM hardware_assets a
            WHERE a.asset_type = ANY($1)
              AND NOT EXISTS (SELECT 1 FROM pc_details d WHERE d.asset_id = a.id)
            ORDER BY a.brand
            "#,
        )
        .bind(
            compatible_types
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>(),
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(assets)
    }
}
