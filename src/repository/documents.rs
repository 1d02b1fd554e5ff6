//! Documents repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::document::{Document, NewDocument},
};

#[derive(Clone)]
pub struct DocumentsRepository {
    pool: Pool<Postgres>,
}

impl DocumentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List documents attached to an asset
    pub async fn list_for_asset(&self, asset_id: i32) -> AppResult<Vec<Document>> {
        let documents = sqlx::query_as::<_, Document>(
            "SELECT * FROM documents WHERE asset_id = $1 ORDER BY id DESC",
        )
        .bind(asset_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(documents)
    }

    /// Get document by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Document> {
        sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Document {} not found", id)))
    }

    /// Insert a document record
    pub async fn create(&self, data: &NewDocument) -> AppResult<Document> {
        let document = sqlx::query_as::<_, Document>(
            r#"
            INSERT INTO documents
                (asset_id, filename, original_name, mime_type, size_bytes, path)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(data.asset_id)
        .bind(&data.filename)
        .bind(&data.original_name)
        .bind(&data.mime_type)
        .bind(data.size_bytes)
        .bind(&data.path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                AppError::BadRequest("Referenced asset does not exist".to_string())
            }
            _ => AppError::Database(e),
        })?;
        Ok(document)
    }

    /// Delete a document record
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Document {} not found", id)));
        }
        Ok(())
    }
}
