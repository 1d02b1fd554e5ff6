//! Document API endpoints (multipart upload, download, delete)

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use axum_extra::extract::Multipart;

use crate::{
    error::{AppError, AppResult},
    models::document::Document,
    services::documents::UploadedFile,
};

/// List documents attached to an asset
#[utoipa::path(
    get,
    path = "/assets/{id}/documents",
    tag = "documents",
    params(("id" = i32, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Document list", body = Vec<Document>)
    )
)]
pub async fn list_documents(
    State(state): State<crate::AppState>,
    Path(asset_id): Path<i32>,
) -> AppResult<Json<Vec<Document>>> {
    let documents = state.services.documents.list_for_asset(asset_id).await?;
    Ok(Json(documents))
}

/// Upload one or more documents for an asset
#[utoipa::path(
    post,
    path = "/assets/{id}/documents",
    tag = "documents",
    params(("id" = i32, Path, description = "Asset ID")),
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Documents stored", body = Vec<Document>),
        (status = 400, description = "Rejected file type or size")
    )
)]
pub async fn upload_documents(
    State(state): State<crate::AppState>,
    Path(asset_id): Path<i32>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<Vec<Document>>)> {
    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        let Some(original_name) = field.file_name().map(|n| n.to_string()) else {
            // Skip non-file fields
            continue;
        };
        let content_type = field.content_type().map(|c| c.to_string());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Could not read upload: {}", e)))?;
        files.push(UploadedFile {
            original_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    let documents = state.services.documents.store(asset_id, files).await?;
    Ok((StatusCode::CREATED, Json(documents)))
}

/// Download a document under its original filename
#[utoipa::path(
    get,
    path = "/documents/{id}/download",
    tag = "documents",
    params(("id" = i32, Path, description = "Document ID")),
    responses(
        (status = 200, description = "File content"),
        (status = 404, description = "Document or file not found")
    )
)]
pub async fn download_document(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Response> {
    let download = state.services.documents.download(id).await?;
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, download.mime_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", download.filename),
        )
        .body(download.body)
        .map_err(|e| AppError::Internal(e.to_string()))
}

/// Delete a document (file and record)
#[utoipa::path(
    delete,
    path = "/documents/{id}",
    tag = "documents",
    params(("id" = i32, Path, description = "Document ID")),
    responses(
        (status = 204, description = "Document deleted")
    )
)]
pub async fn delete_document(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.documents.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
