//! Areas repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::area::{Area, CreateArea, UpdateArea},
};

#[derive(Clone)]
pub struct AreasRepository {
    pool: Pool<Postgres>,
}

impl AreasRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List areas newest-first, optionally filtered by a search term
    /// over name / physical location, paginated.
    pub async fn list(
        &self,
        search: Option<&str>,
        page: i64,
        per_page: i64,
    ) -> AppResult<(Vec<Area>, i64)> {
        let pattern = search.map(|s| format!("%{}%", s));
        let offset = (page - 1) * per_page;

        let (areas, total) = match &pattern {
            Some(p) => {
                let areas = sqlx::query_as::<_, Area>(
                    r#"
                    SELECT * FROM areas
                    WHERE name ILIKE $1 OR physical_location ILIKE $1
                    ORDER BY id DESC
                    LIMIT $2 OFFSET $3
                    "#,
                )
                .bind(p)
                .bind(per_page)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;
                let total: i64 = sqlx::query_scalar(
                    "SELECT COUNT(*) FROM areas WHERE name ILIKE $1 OR physical_location ILIKE $1",
                )
                .bind(p)
                .fetch_one(&self.pool)
                .await?;
                (areas, total)
            }
            None => {
                let areas = sqlx::query_as::<_, Area>(
                    "SELECT * FROM areas ORDER BY id DESC LIMIT $1 OFFSET $2",
                )
                .bind(per_page)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;
                let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM areas")
                    .fetch_one(&self.pool)
                    .await?;
                (areas, total)
            }
        };

        Ok((areas, total))
    }

    /// Get area by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Area> {
        sqlx::query_as::<_, Area>("SELECT * FROM areas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Area {} not found", id)))
    }

    /// Create area
    pub async fn create(&self, data: &CreateArea) -> AppResult<Area> {
        let area = sqlx::query_as::<_, Area>(
            r#"
            INSERT INTO areas (name, physical_location, latitude, longitude)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.physical_location)
        .bind(data.latitude)
        .bind(data.longitude)
        .fetch_one(&self.pool)
        .await?;
        Ok(area)
    }

    /// Update area
    pub async fn update(&self, id: i32, data: &UpdateArea) -> AppResult<Area> {
        sqlx::query_as::<_, Area>(
            r#"
            UPDATE areas
            SET name = $1, physical_location = $2, latitude = $3, longitude = $4,
                updated_at = NOW()
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.physical_location)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Area {} not found", id)))
    }

    /// Delete area. Areas still referenced by assets are protected by the
    /// schema; the FK violation is reported as a conflict.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM areas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                    AppError::Conflict("Area still has assets assigned".to_string())
                }
                _ => AppError::Database(e),
            })?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Area {} not found", id)));
        }
        Ok(())
    }
}
