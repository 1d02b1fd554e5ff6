//! Documents service: upload, download and delete files attached to assets

use axum::body::Body;
use std::path::{Path, PathBuf};
use tokio_util::io::ReaderStream;
use uuid::Uuid;

use crate::{
    config::StorageConfig,
    error::{AppError, AppResult},
    models::document::{Document, NewDocument},
    repository::Repository,
};

/// Accepted upload extensions (mirrors the form rule of the original tool)
const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "xls", "xlsx", "jpg", "jpeg", "png"];

/// Per-file upload cap
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// One file received from a multipart upload
pub struct UploadedFile {
    pub original_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// A ready-to-send document: download filename, mime type, streamed body
pub struct DocumentDownload {
    pub filename: String,
    pub mime_type: String,
    pub body: Body,
}

#[derive(Clone)]
pub struct DocumentsService {
    repository: Repository,
    storage: StorageConfig,
}

impl DocumentsService {
    pub fn new(repository: Repository, storage: StorageConfig) -> Self {
        Self { repository, storage }
    }

    pub async fn list_for_asset(&self, asset_id: i32) -> AppResult<Vec<Document>> {
        self.repository.documents.list_for_asset(asset_id).await
    }

    /// Store uploaded files for an asset and record them.
    ///
    /// Every file is checked before anything is written, so a rejected file
    /// does not leave earlier siblings half-uploaded.
    pub async fn store(&self, asset_id: i32, files: Vec<UploadedFile>) -> AppResult<Vec<Document>> {
        if files.is_empty() {
            return Err(AppError::Validation("No files in upload".to_string()));
        }

        // The asset must exist before touching the disk
        self.repository.assets.get_by_id(asset_id).await?;

        for file in &files {
            let extension = extension_of(&file.original_name).ok_or_else(|| {
                AppError::Validation(format!("File {} has no extension", file.original_name))
            })?;
            if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
                return Err(AppError::Validation(format!(
                    "File type .{} is not allowed",
                    extension
                )));
            }
            if file.bytes.len() > MAX_UPLOAD_BYTES {
                return Err(AppError::Validation(format!(
                    "File {} exceeds the 10 MiB limit",
                    file.original_name
                )));
            }
        }

        let relative_dir = format!("hardware-assets/{}", asset_id);
        let dir = Path::new(&self.storage.documents_dir).join(&relative_dir);
        tokio::fs::create_dir_all(&dir).await?;

        let mut stored = Vec::with_capacity(files.len());
        for file in files {
            let extension = extension_of(&file.original_name).unwrap_or_default();
            let filename = format!("{}.{}", Uuid::new_v4(), extension);
            let relative_path = format!("{}/{}", relative_dir, filename);

            tokio::fs::write(dir.join(&filename), &file.bytes).await?;

            let mime_type = file.content_type.unwrap_or_else(|| {
                mime_guess::from_path(&file.original_name)
                    .first_or_octet_stream()
                    .to_string()
            });

            let document = self
                .repository
                .documents
                .create(&NewDocument {
                    asset_id,
                    filename,
                    original_name: file.original_name,
                    mime_type,
                    size_bytes: file.bytes.len() as i32,
                    path: relative_path,
                })
                .await?;
            stored.push(document);
        }

        Ok(stored)
    }

    /// Open a document for download under its original name
    pub async fn download(&self, id: i32) -> AppResult<DocumentDownload> {
        let document = self.repository.documents.get_by_id(id).await?;
        let path = self.absolute_path(&document.path);

        let file = tokio::fs::File::open(&path).await.map_err(|_| {
            AppError::NotFound(format!("File for document {} not found", document.id))
        })?;

        Ok(DocumentDownload {
            filename: document.original_name,
            mime_type: document.mime_type,
            body: Body::from_stream(ReaderStream::new(file)),
        })
    }

    /// Delete a document's file and record
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let document = self.repository.documents.get_by_id(id).await?;
        let path = self.absolute_path(&document.path);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            // A missing file should not keep the record undeletable
            tracing::warn!("Could not remove document file {}: {}", path.display(), e);
        }
        self.repository.documents.delete(id).await
    }

    fn absolute_path(&self, relative: &str) -> PathBuf {
        Path::new(&self.storage.documents_dir).join(relative)
    }
}

fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(extension_of("Factura.PDF"), Some("pdf".to_string()));
        assert_eq!(extension_of("foto.jpeg"), Some("jpeg".to_string()));
        assert_eq!(extension_of("sin_extension"), None);
    }
}
