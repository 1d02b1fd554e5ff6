//! Area API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppResult,
    models::area::{Area, AreaQuery, CreateArea, UpdateArea},
};

/// Paginated area listing
#[derive(Serialize, ToSchema)]
pub struct AreasPage {
    pub items: Vec<Area>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

/// List areas with search and pagination
#[utoipa::path(
    get,
    path = "/areas",
    tag = "areas",
    params(
        ("search" = Option<String>, Query, description = "Search in name / physical location"),
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<i64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Paginated areas", body = AreasPage)
    )
)]
pub async fn list_areas(
    State(state): State<crate::AppState>,
    Query(query): Query<AreaQuery>,
) -> AppResult<Json<AreasPage>> {
    let (items, total, page, per_page) = state.services.areas.list(&query).await?;
    Ok(Json(AreasPage {
        items,
        total,
        page,
        per_page,
    }))
}

/// Get area by ID
#[utoipa::path(
    get,
    path = "/areas/{id}",
    tag = "areas",
    params(("id" = i32, Path, description = "Area ID")),
    responses(
        (status = 200, description = "Area details", body = Area),
        (status = 404, description = "Area not found")
    )
)]
pub async fn get_area(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Area>> {
    let area = state.services.areas.get_by_id(id).await?;
    Ok(Json(area))
}

/// Create area
#[utoipa::path(
    post,
    path = "/areas",
    tag = "areas",
    request_body = CreateArea,
    responses(
        (status = 201, description = "Area created", body = Area)
    )
)]
pub async fn create_area(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateArea>,
) -> AppResult<(StatusCode, Json<Area>)> {
    data.validate()?;
    let area = state.services.areas.create(&data).await?;
    Ok((StatusCode::CREATED, Json(area)))
}

/// Update area
#[utoipa::path(
    put,
    path = "/areas/{id}",
    tag = "areas",
    params(("id" = i32, Path, description = "Area ID")),
    request_body = UpdateArea,
    responses(
        (status = 200, description = "Area updated", body = Area)
    )
)]
pub async fn update_area(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateArea>,
) -> AppResult<Json<Area>> {
    data.validate()?;
    let area = state.services.areas.update(id, &data).await?;
    Ok(Json(area))
}

/// Delete area
#[utoipa::path(
    delete,
    path = "/areas/{id}",
    tag = "areas",
    params(("id" = i32, Path, description = "Area ID")),
    responses(
        (status = 204, description = "Area deleted"),
        (status = 409, description = "Area still has assets assigned")
    )
)]
pub async fn delete_area(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.areas.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
