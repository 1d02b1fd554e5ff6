//! Hardware asset API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::asset::{AssetQuery, AssetWithArea, CreateAsset, HardwareAsset, UpdateAsset},
};

/// List assets, newest-first, optionally filtered by type / status
#[utoipa::path(
    get,
    path = "/assets",
    tag = "assets",
    params(
        ("asset_type" = Option<String>, Query, description = "Filter by asset type"),
        ("status" = Option<String>, Query, description = "Filter by status")
    ),
    responses(
        (status = 200, description = "Asset list", body = Vec<AssetWithArea>)
    )
)]
pub async fn list_assets(
    State(state): State<crate::AppState>,
    Query(query): Query<AssetQuery>,
) -> AppResult<Json<Vec<AssetWithArea>>> {
    let assets = state.services.assets.list(&query).await?;
    Ok(Json(assets))
}

/// Get asset by ID
#[utoipa::path(
    get,
    path = "/assets/{id}",
    tag = "assets",
    params(("id" = i32, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Asset details", body = AssetWithArea),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn get_asset(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<AssetWithArea>> {
    let asset = state.services.assets.get_by_id(id).await?;
    Ok(Json(asset))
}

/// Create asset
#[utoipa::path(
    post,
    path = "/assets",
    tag = "assets",
    request_body = CreateAsset,
    responses(
        (status = 201, description = "Asset created", body = HardwareAsset),
        (status = 409, description = "Serial number already registered")
    )
)]
pub async fn create_asset(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateAsset>,
) -> AppResult<(StatusCode, Json<HardwareAsset>)> {
    data.validate()?;
    let asset = state.services.assets.create(&data).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

/// Update asset
#[utoipa::path(
    put,
    path = "/assets/{id}",
    tag = "assets",
    params(("id" = i32, Path, description = "Asset ID")),
    request_body = UpdateAsset,
    responses(
        (status = 200, description = "Asset updated", body = HardwareAsset)
    )
)]
pub async fn update_asset(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateAsset>,
) -> AppResult<Json<HardwareAsset>> {
    data.validate()?;
    let asset = state.services.assets.update(id, &data).await?;
    Ok(Json(asset))
}

/// Delete asset (detail, maintenances and documents cascade)
#[utoipa::path(
    delete,
    path = "/assets/{id}",
    tag = "assets",
    params(("id" = i32, Path, description = "Asset ID")),
    responses(
        (status = 204, description = "Asset deleted")
    )
)]
pub async fn delete_asset(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.assets.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
