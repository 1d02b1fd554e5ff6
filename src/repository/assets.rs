//! Hardware assets repository for database operations

use sqlx::{FromRow, Pool, Postgres, Row};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        area::AreaSummary,
        asset::{AssetQuery, AssetWithArea, CreateAsset, HardwareAsset, UpdateAsset},
    },
};

#[derive(Clone)]
pub struct AssetsRepository {
    pool: Pool<Postgres>,
}

fn with_area(row: &sqlx::postgres::PgRow) -> Result<AssetWithArea, sqlx::Error> {
    let asset = HardwareAsset::from_row(row)?;
    let area = match (asset.area_id, row.try_get::<Option<String>, _>("area_name")?) {
        (Some(id), Some(name)) => Some(AreaSummary { id, name }),
        _ => None,
    };
    Ok(AssetWithArea { asset, area })
}

impl AssetsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List assets newest-first with their areas, optionally filtered
    /// by type and/or status.
    pub async fn list(&self, query: &AssetQuery) -> AppResult<Vec<AssetWithArea>> {
        let mut conditions = Vec::new();
        if query.asset_type.is_some() {
            conditions.push(format!("a.asset_type = ${}", conditions.len() + 1));
        }
        if query.status.is_some() {
            conditions.push(format!("a.status = ${}", conditions.len() + 1));
        }
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            r#"
            SELECT a.*, ar.name AS area_name
            FROM hardware_assets a
            LEFT JOIN areas ar ON a.area_id = ar.id
            {}
            ORDER BY a.id DESC
            "#,
            where_clause
        );

        let mut builder = sqlx::query(&sql);
        if let Some(ref t) = query.asset_type {
            builder = builder.bind(t);
        }
        if let Some(ref s) = query.status {
            builder = builder.bind(s);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        let assets = rows
            .iter()
            .map(with_area)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(assets)
    }

    /// Get asset by ID with its area
    pub async fn get_by_id(&self, id: i32) -> AppResult<AssetWithArea> {
        let row = sqlx::query(
            r#"
            SELECT a.*, ar.name AS area_name
            FROM hardware_assets a
            LEFT JOIN areas ar ON a.area_id = ar.id
            WHERE a.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))?;
        Ok(with_area(&row)?)
    }

    /// Create asset. The uuid is generated server-side; duplicate serial
    /// numbers are reported as a conflict.
    pub async fn create(&self, data: &CreateAsset) -> AppResult<HardwareAsset> {
        let asset = sqlx::query_as::<_, HardwareAsset>(
            r#"
            INSERT INTO hardware_assets
                (uuid, asset_type, brand, model, serial_number, status, area_id,
                 description, acquired_on, warranty_until, needs_maintenance)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.asset_type)
        .bind(&data.brand)
        .bind(&data.model)
        .bind(&data.serial_number)
        .bind(&data.status)
        .bind(data.area_id)
        .bind(&data.description)
        .bind(data.acquired_on)
        .bind(data.warranty_until)
        .bind(data.needs_maintenance)
        .fetch_one(&self.pool)
        .await
        .map_err(Self::map_write_error)?;
        Ok(asset)
    }

    /// Update asset
    pub async fn update(&self, id: i32, data: &UpdateAsset) -> AppResult<HardwareAsset> {
        sqlx::query_as::<_, HardwareAsset>(
            r#"
            UPDATE hardware_assets
            SET asset_type = $1, brand = $2, model = $3, serial_number = $4,
                status = $5, area_id = $6, description = $7, acquired_on = $8,
                warranty_until = $9, needs_maintenance = $10, updated_at = NOW()
            WHERE id = $11
            RETURNING *
            "#,
        )
        .bind(&data.asset_type)
        .bind(&data.brand)
        .bind(&data.model)
        .bind(&data.serial_number)
        .bind(&data.status)
        .bind(data.area_id)
        .bind(&data.description)
        .bind(data.acquired_on)
        .bind(data.warranty_until)
        .bind(data.needs_maintenance)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Self::map_write_error)?
        .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))
    }

    /// Delete asset (details, maintenances and documents cascade)
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM hardware_assets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Asset {} not found", id)));
        }
        Ok(())
    }

    /// Get the declared type of an asset, if it exists
    pub async fn get_type(&self, id: i32) -> AppResult<Option<String>> {
        let asset_type = sqlx::query_scalar::<_, String>(
            "SELECT asset_type FROM hardware_assets WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(asset_type)
    }

    fn map_write_error(e: sqlx::Error) -> AppError {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("Serial number already registered".to_string())
            }
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                AppError::BadRequest("Referenced area does not exist".to_string())
            }
            _ => AppError::Database(e),
        }
    }
}
