//! Inventario Server - IT Hardware Asset Inventory
//!
//! A Rust REST API server for hardware inventory and maintenance tracking.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inventario_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("inventario_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Inventario Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(
        repository,
        config.database.clone(),
        config.storage.clone(),
    );

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Dashboard
        .route("/dashboard", get(api::dashboard::overview))
        // Areas
        .route("/areas", get(api::areas::list_areas))
        .route("/areas", post(api::areas::create_area))
        .route("/areas/:id", get(api::areas::get_area))
        .route("/areas/:id", put(api::areas::update_area))
        .route("/areas/:id", delete(api::areas::delete_area))
        // Hardware assets
        .route("/assets", get(api::assets::list_assets))
        .route("/assets", post(api::assets::create_asset))
        .route("/assets/:id", get(api::assets::get_asset))
        .route("/assets/:id", put(api::assets::update_asset))
        .route("/assets/:id", delete(api::assets::delete_asset))
        // PC details (export/report/available-assets before the :id routes)
        .route("/pc-details/export", get(api::pc_details::export_csv))
        .route("/pc-details/report", get(api::pc_details::report))
        .route(
            "/pc-details/available-assets",
            get(api::pc_details::available_assets),
        )
        .route("/pc-details", get(api::pc_details::list_pc_details))
        .route("/pc-details", post(api::pc_details::create_pc_detail))
        .route("/pc-details/:id", get(api::pc_details::get_pc_detail))
        .route("/pc-details/:id", put(api::pc_details::update_pc_detail))
        .route("/pc-details/:id", delete(api::pc_details::delete_pc_detail))
        // Maintenances
        .route("/maintenances", get(api::maintenances::list_maintenances))
        .route("/maintenances", post(api::maintenances::create_maintenance))
        .route("/maintenances/:id", get(api::maintenances::get_maintenance))
        .route("/maintenances/:id", put(api::maintenances::update_maintenance))
        .route(
            "/maintenances/:id",
            delete(api::maintenances::delete_maintenance),
        )
        // Documents (uploads may carry several 10 MiB files)
        .route(
            "/assets/:id/documents",
            get(api::documents::list_documents)
                .post(api::documents::upload_documents)
                .layer(DefaultBodyLimit::max(64 * 1024 * 1024)),
        )
        .route(
            "/documents/:id/download",
            get(api::documents::download_document),
        )
        .route("/documents/:id", delete(api::documents::delete_document))
        // Backup
        .route("/backup/download", get(api::backup::download))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
