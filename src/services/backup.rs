//! Database backup service.
//!
//! Preferred strategy shells out to `pg_dump` with the configured connection
//! URL. When the utility is not installed, an in-process data-only dump is
//! produced instead: schema DDL belongs to the embedded migrations, so the
//! fallback emits TRUNCATE + INSERT statements for every public table. The
//! fallback quotes values through their JSON projection and does not
//! round-trip binary columns; `pg_dump` is the reliable path.

use axum::body::Body;
use chrono::Local;
use serde_json::Value;
use sqlx::Row;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tokio_util::io::ReaderStream;

use crate::{
    config::{DatabaseConfig, StorageConfig},
    error::{AppError, AppResult},
    repository::Repository,
};

/// Common pg_dump install locations probed after $PATH
const PG_DUMP_CANDIDATES: &[&str] = &[
    "/usr/bin/pg_dump",
    "/usr/local/bin/pg_dump",
    "/opt/homebrew/bin/pg_dump",
    "/usr/lib/postgresql/16/bin/pg_dump",
    "/usr/lib/postgresql/15/bin/pg_dump",
    "/usr/lib/postgresql/14/bin/pg_dump",
];

/// A ready-to-send dump: attachment filename plus streamed body
pub struct BackupDownload {
    pub filename: String,
    pub body: Body,
}

#[derive(Clone)]
pub struct BackupService {
    repository: Repository,
    database: DatabaseConfig,
    storage: StorageConfig,
}

impl BackupService {
    pub fn new(repository: Repository, database: DatabaseConfig, storage: StorageConfig) -> Self {
        Self {
            repository,
            database,
            storage,
        }
    }

    /// Produce a SQL dump and hand it back as a streamed download.
    ///
    /// The scratch file is unlinked as soon as it is opened for streaming;
    /// the open handle keeps the bytes readable until the body is consumed,
    /// so the file is gone from storage even if the client disconnects.
    pub async fn download(&self) -> AppResult<BackupDownload> {
        let path = self.create_backup_file().await?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "backup.sql".to_string());

        let file = tokio::fs::File::open(&path)
            .await
            .map_err(|e| AppError::Backup(format!("cannot open dump file: {}", e)))?;
        if let Err(e) = tokio::fs::remove_file(&path).await {
            tracing::warn!("Could not remove backup scratch file {}: {}", path.display(), e);
        }

        Ok(BackupDownload {
            filename,
            body: Body::from_stream(ReaderStream::new(file)),
        })
    }

    /// Write the dump to a scratch file, picking pg_dump when available
    async fn create_backup_file(&self) -> AppResult<PathBuf> {
        let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
        let filename = format!("backup_{}.sql", timestamp);

        tokio::fs::create_dir_all(&self.storage.backup_dir)
            .await
            .map_err(|e| AppError::Backup(format!("cannot create backup directory: {}", e)))?;
        let filepath = Path::new(&self.storage.backup_dir).join(&filename);

        tracing::info!("Starting database backup to {}", filepath.display());

        let result = match self.find_pg_dump().await {
            Some(pg_dump) => {
                tracing::info!("Using pg_dump at: {}", pg_dump);
                self.backup_with_pg_dump(&pg_dump, &filepath).await
            }
            None => {
                tracing::info!("pg_dump not found, using in-process data dump");
                self.backup_in_process(&filepath).await
            }
        };

        if let Err(e) = result {
            let _ = tokio::fs::remove_file(&filepath).await;
            return Err(e);
        }

        let size = tokio::fs::metadata(&filepath)
            .await
            .map(|m| m.len())
            .unwrap_or(0);
        if size == 0 {
            let _ = tokio::fs::remove_file(&filepath).await;
            return Err(AppError::Backup("the dump file is empty".to_string()));
        }

        tracing::info!("Backup created: {} ({} bytes)", filepath.display(), size);
        Ok(filepath)
    }

    /// Locate pg_dump on $PATH or at a fixed list of install locations
    async fn find_pg_dump(&self) -> Option<String> {
        let on_path = Command::new("pg_dump")
            .arg("--version")
            .output()
            .await
            .map(|o| o.status.success())
            .unwrap_or(false);
        if on_path {
            return Some("pg_dump".to_string());
        }
        for path in PG_DUMP_CANDIDATES {
            if tokio::fs::metadata(path).await.is_ok() {
                return Some((*path).to_string());
            }
        }
        None
    }

    async fn backup_with_pg_dump(&self, pg_dump: &str, filepath: &Path) -> AppResult<()> {
        // The connection URL (credentials included) travels only as an
        // argument; the log line stays free of it.
        tracing::info!(
            "Executing: {} --format=plain --file={}",
            pg_dump,
            filepath.display()
        );

        let output = Command::new(pg_dump)
            .arg("--format=plain")
            .arg("--no-owner")
            .arg("--no-privileges")
            .arg(format!("--file={}", filepath.display()))
            .arg(format!("--dbname={}", self.database.url))
            .output()
            .await
            .map_err(|e| AppError::Backup(format!("failed to run pg_dump: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::Backup(format!(
                "pg_dump failed: {}",
                stderr.trim()
            )));
        }
        Ok(())
    }

    /// Data-only fallback dump of every public table
    async fn backup_in_process(&self, filepath: &Path) -> AppResult<()> {
        let pool = &self.repository.pool;

        let mut sql = String::new();
        sql.push_str("-- PostgreSQL data dump\n");
        sql.push_str(&format!(
            "-- Generated: {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
        sql.push_str("-- Data only; schema is managed by the application migrations.\n\n");
        sql.push_str("SET session_replication_role = replica;\n\n");

        let tables: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT table_name FROM information_schema.tables
            WHERE table_schema = 'public' AND table_type = 'BASE TABLE'
            ORDER BY table_name
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(|e| AppError::Backup(format!("cannot list tables: {}", e)))?;

        for table in &tables {
            tracing::info!("Backing up table: {}", table);

            let columns: Vec<String> = sqlx::query_scalar(
                r#"
                SELECT column_name FROM information_schema.columns
                WHERE table_schema = 'public' AND table_name = $1
                ORDER BY ordinal_position
                "#,
            )
            .bind(table)
            .fetch_all(pool)
            .await
            .map_err(|e| AppError::Backup(format!("cannot list columns of {}: {}", table, e)))?;

            sql.push_str(&format!("-- Table: {}\n", table));
            sql.push_str(&format!("TRUNCATE TABLE \"{}\" CASCADE;\n", table));

            let rows = sqlx::query(&format!("SELECT to_jsonb(t) AS row FROM \"{}\" t", table))
                .fetch_all(pool)
                .await
                .map_err(|e| AppError::Backup(format!("cannot read table {}: {}", table, e)))?;

            for row in &rows {
                let value: Value = row
                    .try_get("row")
                    .map_err(|e| AppError::Backup(format!("cannot decode row of {}: {}", table, e)))?;
                sql.push_str(&insert_statement(table, &columns, &value));
            }
            sql.push('\n');
        }

        sql.push_str("SET session_replication_role = DEFAULT;\n");

        tokio::fs::write(filepath, sql)
            .await
            .map_err(|e| AppError::Backup(format!("cannot write dump file: {}", e)))?;
        Ok(())
    }
}

/// Build one INSERT statement from a row's JSON projection
fn insert_statement(table: &str, columns: &[String], row: &Value) -> String {
    let column_list = columns
        .iter()
        .map(|c| format!("\"{}\"", c))
        .collect::<Vec<_>>()
        .join(", ");
    let values = columns
        .iter()
        .map(|c| quote_sql_value(row.get(c).unwrap_or(&Value::Null)))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO \"{}\" ({}) VALUES ({});\n",
        table, column_list, values
    )
}

/// Naive value quoting; Postgres casts the text literals back on restore
fn quote_sql_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("'{}'", s.replace('\'', "''")),
        other => format!("'{}'", other.to_string().replace('\'', "''")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quotes_scalar_values() {
        assert_eq!(quote_sql_value(&Value::Null), "NULL");
        assert_eq!(quote_sql_value(&json!(true)), "TRUE");
        assert_eq!(quote_sql_value(&json!(42)), "42");
        assert_eq!(quote_sql_value(&json!(1.5)), "1.5");
        assert_eq!(quote_sql_value(&json!("plain")), "'plain'");
    }

    #[test]
    fn doubles_embedded_quotes() {
        assert_eq!(quote_sql_value(&json!("O'Brien")), "'O''Brien'");
    }

    #[test]
    fn builds_insert_in_column_order() {
        let columns = vec!["id".to_string(), "name".to_string(), "area_id".to_string()];
        let row = json!({"id": 3, "name": "Sala", "area_id": null});
        assert_eq!(
            insert_statement("areas", &columns, &row),
            "INSERT INTO \"areas\" (\"id\", \"name\", \"area_id\") VALUES (3, 'Sala', NULL);\n"
        );
    }
}
