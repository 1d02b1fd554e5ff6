//! Maintenances repository for database operations

use sqlx::{FromRow, Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        asset::AssetSummary,
        maintenance::{CreateMaintenance, Maintenance, MaintenanceWithAsset, UpdateMaintenance},
    },
};

const MAINTENANCE_JOIN_SELECT: &str = r#"
SELECT m.*,
       a.id AS a_id, a.asset_type AS a_type, a.brand AS a_brand,
       a.model AS a_model, a.serial_number AS a_serial
FROM maintenances m
LEFT JOIN hardware_assets a ON m.asset_id = a.id
"#;

fn with_asset(row: &sqlx::postgres::PgRow) -> Result<MaintenanceWithAsset, sqlx::Error> {
    let maintenance = Maintenance::from_row(row)?;
    let hardware_asset = match row.try_get::<Option<i32>, _>("a_id")? {
        Some(id) => Some(AssetSummary {
            id,
            asset_type: row.try_get("a_type")?,
            brand: row.try_get("a_brand")?,
            model: row.try_get("a_model")?,
            serial_number: row.try_get("a_serial")?,
        }),
        None => None,
    };
    Ok(MaintenanceWithAsset {
        maintenance,
        hardware_asset,
    })
}

#[derive(Clone)]
pub struct MaintenancesRepository {
    pool: Pool<Postgres>,
}

impl MaintenancesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List maintenances with their assets, most recent service first
    pub async fn list_with_assets(&self) -> AppResult<Vec<MaintenanceWithAsset>> {
        let sql = format!("{} ORDER BY m.service_date DESC, m.id DESC", MAINTENANCE_JOIN_SELECT);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        let maintenances = rows
            .iter()
            .map(with_asset)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(maintenances)
    }

    /// Most recent maintenances with their assets (dashboard)
    pub async fn recent_with_assets(&self, limit: i64) -> AppResult<Vec<MaintenanceWithAsset>> {
        let sql = format!(
            "{} ORDER BY m.service_date DESC, m.id DESC LIMIT $1",
            MAINTENANCE_JOIN_SELECT
        );
        let rows = sqlx::query(&sql).bind(limit).fetch_all(&self.pool).await?;
        let maintenances = rows
            .iter()
            .map(with_asset)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(maintenances)
    }

    /// Get maintenance by ID with its asset
    pub async fn get_by_id(&self, id: i32) -> AppResult<MaintenanceWithAsset> {
        let sql = format!("{} WHERE m.id = $1", MAINTENANCE_JOIN_SELECT);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Maintenance {} not found", id)))?;
        Ok(with_asset(&row)?)
    }

    /// Create maintenance
    pub async fn create(&self, data: &CreateMaintenance) -> AppResult<Maintenance> {
        let maintenance = sqlx::query_as::<_, Maintenance>(
            r#"
            INSERT INTO maintenances
                (asset_id, service_date, technician, description, next_service_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(data.asset_id)
        .bind(data.service_date)
        .bind(&data.technician)
        .bind(&data.description)
        .bind(data.next_service_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                AppError::BadRequest("Referenced asset does not exist".to_string())
            }
            _ => AppError::Database(e),
        })?;
        Ok(maintenance)
    }

    /// Update maintenance
    pub async fn update(&self, id: i32, data: &UpdateMaintenance) -> AppResult<Maintenance> {
        sqlx::query_as::<_, Maintenance>(
            r#"
            UPDATE maintenances
            SET asset_id = $1, service_date = $2, technician = $3,
                description = $4, next_service_date = $5, updated_at = NOW()
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(data.asset_id)
        .bind(data.service_date)
        .bind(&data.technician)
        .bind(&data.description)
        .bind(data.next_service_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Maintenance {} not found", id)))
    }

    /// Delete maintenance
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM maintenances WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Maintenance {} not found", id)));
        }
        Ok(())
    }
}
