//! PC detail API endpoints, including the CSV export and the report payload

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        asset::AssetSummary,
        pc_detail::{CreatePcDetail, PcDetail, PcDetailWithAsset, UpdatePcDetail},
    },
    services::export::PcReport,
};

/// List PC details, newest-first, with their assets
#[utoipa::path(
    get,
    path = "/pc-details",
    tag = "pc-details",
    responses(
        (status = 200, description = "Detail list", body = Vec<PcDetailWithAsset>)
    )
)]
pub async fn list_pc_details(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<PcDetailWithAsset>>> {
    let details = state.services.pc_details.list().await?;
    Ok(Json(details))
}

/// Get PC detail by ID
#[utoipa::path(
    get,
    path = "/pc-details/{id}",
    tag = "pc-details",
    params(("id" = i32, Path, description = "Detail ID")),
    responses(
        (status = 200, description = "Detail", body = PcDetailWithAsset),
        (status = 404, description = "Detail not found")
    )
)]
pub async fn get_pc_detail(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<PcDetailWithAsset>> {
    let detail = state.services.pc_details.get_by_id(id).await?;
    Ok(Json(detail))
}

/// Create PC detail
#[utoipa::path(
    post,
    path = "/pc-details",
    tag = "pc-details",
    request_body = CreatePcDetail,
    responses(
        (status = 201, description = "Detail created", body = PcDetail),
        (status = 409, description = "Asset already has a detail")
    )
)]
pub async fn create_pc_detail(
    State(state): State<crate::AppState>,
    Json(data): Json<CreatePcDetail>,
) -> AppResult<(StatusCode, Json<PcDetail>)> {
    data.validate()?;
    let detail = state.services.pc_details.create(&data).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// Update PC detail
#[utoipa::path(
    put,
    path = "/pc-details/{id}",
    tag = "pc-details",
    params(("id" = i32, Path, description = "Detail ID")),
    request_body = UpdatePcDetail,
    responses(
        (status = 200, description = "Detail updated", body = PcDetail)
    )
)]
pub async fn update_pc_detail(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdatePcDetail>,
) -> AppResult<Json<PcDetail>> {
    data.validate()?;
    let detail = state.services.pc_details.update(id, &data).await?;
    Ok(Json(detail))
}

/// Delete PC detail
#[utoipa::path(
    delete,
    path = "/pc-details/{id}",
    tag = "pc-details",
    params(("id" = i32, Path, description = "Detail ID")),
    responses(
        (status = 204, description = "Detail deleted")
    )
)]
pub async fn delete_pc_detail(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.pc_details.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PC-compatible assets that do not have a detail yet
#[utoipa::path(
    get,
    path = "/pc-details/available-assets",
    tag = "pc-details",
    responses(
        (status = 200, description = "Assets without details", body = Vec<AssetSummary>)
    )
)]
pub async fn available_assets(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<AssetSummary>>> {
    let assets = state.services.pc_details.available_assets().await?;
    Ok(Json(assets))
}

/// Download the full PC inventory as a streamed CSV document
#[utoipa::path(
    get,
    path = "/pc-details/export",
    tag = "pc-details",
    responses(
        (status = 200, description = "CSV export", content_type = "text/csv")
    )
)]
pub async fn export_csv(State(state): State<crate::AppState>) -> AppResult<Response> {
    let export = state.services.export.csv_export().await?;
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/csv")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export.filename),
        )
        .body(export.body)
        .map_err(|e| AppError::Internal(e.to_string()))
}

/// Report payload for the printable inventory view
#[utoipa::path(
    get,
    path = "/pc-details/report",
    tag = "pc-details",
    responses(
        (status = 200, description = "Report payload", body = PcReport)
    )
)]
pub async fn report(State(state): State<crate::AppState>) -> AppResult<Json<PcReport>> {
    let report = state.services.export.report().await?;
    Ok(Json(report))
}
