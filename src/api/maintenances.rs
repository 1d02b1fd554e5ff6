//! Maintenance API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::maintenance::{
        CreateMaintenance, Maintenance, MaintenanceWithAsset, UpdateMaintenance,
    },
};

/// List maintenances, most recent service first
#[utoipa::path(
    get,
    path = "/maintenances",
    tag = "maintenances",
    responses(
        (status = 200, description = "Maintenance list", body = Vec<MaintenanceWithAsset>)
    )
)]
pub async fn list_maintenances(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<MaintenanceWithAsset>>> {
    let maintenances = state.services.maintenances.list().await?;
    Ok(Json(maintenances))
}

/// Get maintenance by ID
#[utoipa::path(
    get,
    path = "/maintenances/{id}",
    tag = "maintenances",
    params(("id" = i32, Path, description = "Maintenance ID")),
    responses(
        (status = 200, description = "Maintenance", body = MaintenanceWithAsset),
        (status = 404, description = "Maintenance not found")
    )
)]
pub async fn get_maintenance(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MaintenanceWithAsset>> {
    let maintenance = state.services.maintenances.get_by_id(id).await?;
    Ok(Json(maintenance))
}

/// Create maintenance
#[utoipa::path(
    post,
    path = "/maintenances",
    tag = "maintenances",
    request_body = CreateMaintenance,
    responses(
        (status = 201, description = "Maintenance created", body = Maintenance)
    )
)]
pub async fn create_maintenance(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateMaintenance>,
) -> AppResult<(StatusCode, Json<Maintenance>)> {
    data.validate()?;
    let maintenance = state.services.maintenances.create(&data).await?;
    Ok((StatusCode::CREATED, Json(maintenance)))
}

/// Update maintenance
#[utoipa::path(
    put,
    path = "/maintenances/{id}",
    tag = "maintenances",
    params(("id" = i32, Path, description = "Maintenance ID")),
    request_body = UpdateMaintenance,
    responses(
        (status = 200, description = "Maintenance updated", body = Maintenance)
    )
)]
pub async fn update_maintenance(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateMaintenance>,
) -> AppResult<Json<Maintenance>> {
    data.validate()?;
    let maintenance = state.services.maintenances.update(id, &data).await?;
    Ok(Json(maintenance))
}

/// Delete maintenance
#[utoipa::path(
    delete,
    path = "/maintenances/{id}",
    tag = "maintenances",
    params(("id" = i32, Path, description = "Maintenance ID")),
    responses(
        (status = 204, description = "Maintenance deleted")
    )
)]
pub async fn delete_maintenance(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.maintenances.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
