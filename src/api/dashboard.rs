//! Dashboard endpoint and response types

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::maintenance::MaintenanceWithAsset};

/// A label/value pair for chart series
#[derive(Debug, Serialize, ToSchema)]
pub struct StatEntry {
    pub label: String,
    pub value: i64,
}

/// Headline counters
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total_assets: i64,
    pub operational_assets: i64,
    pub assets_in_repair: i64,
    pub total_maintenances: i64,
    pub total_areas: i64,
    pub total_pc_details: i64,
    pub operational_percentage: f64,
}

/// Chart series
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardCharts {
    pub assets_by_status: Vec<StatEntry>,
    /// Top 10 areas by asset count
    pub assets_by_area: Vec<StatEntry>,
    /// Last 6 months, YYYY-MM labels
    pub maintenances_by_month: Vec<StatEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub charts: DashboardCharts,
    pub recent_maintenances: Vec<MaintenanceWithAsset>,
}

/// Dashboard overview: KPIs, chart series and recent maintenances
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard data", body = DashboardResponse)
    )
)]
pub async fn overview(State(state): State<crate::AppState>) -> AppResult<Json<DashboardResponse>> {
    let dashboard = state.services.dashboard.overview().await?;
    Ok(Json(dashboard))
}
