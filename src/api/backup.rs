//! Database backup endpoint

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::Response,
};

use crate::error::{AppError, AppResult};

/// Download a SQL dump of the whole database.
///
/// Any failure in the backup procedure is reported as a structured error
/// with its message; this endpoint never answers with a masked server error.
#[utoipa::path(
    get,
    path = "/backup/download",
    tag = "backup",
    responses(
        (status = 200, description = "SQL dump", content_type = "application/sql"),
        (status = 503, description = "Backup could not be generated")
    )
)]
pub async fn download(State(state): State<crate::AppState>) -> AppResult<Response> {
    let backup = state.services.backup.download().await?;
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/sql")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", backup.filename),
        )
        .body(backup.body)
        .map_err(|e| AppError::Backup(e.to_string()))
}
