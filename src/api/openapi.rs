//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{areas, assets, backup, dashboard, documents, health, maintenances, pc_details};
use crate::{error, models, services};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventario API",
        version = "0.1.0",
        description = "IT Hardware Asset Inventory & Maintenance REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Dashboard
        dashboard::overview,
        // Areas
        areas::list_areas,
        areas::get_area,
        areas::create_area,
        areas::update_area,
        areas::delete_area,
        // Assets
        assets::list_assets,
        assets::get_asset,
        assets::create_asset,
        assets::update_asset,
        assets::delete_asset,
        // PC details
        pc_details::list_pc_details,
        pc_details::get_pc_detail,
        pc_details::create_pc_detail,
        pc_details::update_pc_detail,
        pc_details::delete_pc_detail,
        pc_details::available_assets,
        pc_details::export_csv,
        pc_details::report,
        // Maintenances
        maintenances::list_maintenances,
        maintenances::get_maintenance,
        maintenances::create_maintenance,
        maintenances::update_maintenance,
        maintenances::delete_maintenance,
        // Documents
        documents::list_documents,
        documents::upload_documents,
        documents::download_document,
        documents::delete_document,
        // Backup
        backup::download,
    ),
    components(schemas(
        error::ErrorResponse,
        health::HealthResponse,
        areas::AreasPage,
        dashboard::StatEntry,
        dashboard::DashboardStats,
        dashboard::DashboardCharts,
        dashboard::DashboardResponse,
        models::area::Area,
        models::area::AreaSummary,
        models::area::CreateArea,
        models::area::UpdateArea,
        models::asset::HardwareAsset,
        models::asset::AssetWithArea,
        models::asset::AssetSummary,
        models::asset::CreateAsset,
        models::asset::UpdateAsset,
        models::enums::AssetType,
        models::enums::AssetStatus,
        models::pc_detail::PcDetail,
        models::pc_detail::DetailAsset,
        models::pc_detail::PcDetailWithAsset,
        models::pc_detail::CreatePcDetail,
        models::pc_detail::UpdatePcDetail,
        models::maintenance::Maintenance,
        models::maintenance::MaintenanceWithAsset,
        models::maintenance::CreateMaintenance,
        models::maintenance::UpdateMaintenance,
        models::document::Document,
        services::export::PcReport,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "dashboard", description = "Inventory overview"),
        (name = "areas", description = "Physical / organizational areas"),
        (name = "assets", description = "Hardware assets"),
        (name = "pc-details", description = "PC specifications, export and report"),
        (name = "maintenances", description = "Maintenance log"),
        (name = "documents", description = "Documents attached to assets"),
        (name = "backup", description = "Database backup")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
