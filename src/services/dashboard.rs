//! Dashboard statistics service

use sqlx::Row;

use crate::{
    api::dashboard::{DashboardCharts, DashboardResponse, DashboardStats, StatEntry},
    error::AppResult,
    models::enums::AssetStatus,
    repository::Repository,
};

#[derive(Clone)]
pub struct DashboardService {
    repository: Repository,
}

impl DashboardService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Collect the dashboard KPIs, chart series and recent maintenances
    pub async fn overview(&self) -> AppResult<DashboardResponse> {
        let pool = &self.repository.pool;

        let total_assets: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hardware_assets")
            .fetch_one(pool)
            .await?;

        let operational_assets: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM hardware_assets WHERE status = $1")
                .bind(AssetStatus::Operational.as_str())
                .fetch_one(pool)
                .await?;

        let assets_in_repair: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM hardware_assets WHERE status = $1")
                .bind(AssetStatus::InRepair.as_str())
                .fetch_one(pool)
                .await?;

        let total_maintenances: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM maintenances")
            .fetch_one(pool)
            .await?;

        let total_areas: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM areas")
            .fetch_one(pool)
            .await?;

        let total_pc_details: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pc_details")
            .fetch_one(pool)
            .await?;

        let operational_percentage = if total_assets > 0 {
            ((operational_assets as f64 / total_assets as f64) * 1000.0).round() / 10.0
        } else {
            0.0
        };

        let assets_by_status = sqlx::query(
            r#"
            SELECT status AS label, COUNT(*) AS value
            FROM hardware_assets
            GROUP BY status
            ORDER BY value DESC
            "#,
        )
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(|row| StatEntry {
            label: row.get("label"),
            value: row.get("value"),
        })
        .collect();

        let assets_by_area = sqlx::query(
            r#"
            SELECT COALESCE(ar.name, 'No asignada') AS label, COUNT(*) AS value
            FROM hardware_assets a
            LEFT JOIN areas ar ON a.area_id = ar.id
            GROUP BY ar.name
            ORDER BY value DESC
            LIMIT 10
            "#,
        )
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(|row| StatEntry {
            label: row.get("label"),
            value: row.get("value"),
        })
        .collect();

        let maintenances_by_month = sqlx::query(
            r#"
            SELECT TO_CHAR(DATE_TRUNC('month', service_date), 'YYYY-MM') AS label,
                   COUNT(*) AS value
            FROM maintenances
            WHERE service_date >= CURRENT_DATE - INTERVAL '6 months'
            GROUP BY DATE_TRUNC('month', service_date)
            ORDER BY label
            "#,
        )
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(|row| StatEntry {
            label: row.get("label"),
            value: row.get("value"),
        })
        .collect();

        let recent_maintenances = self.repository.maintenances.recent_with_assets(5).await?;

        Ok(DashboardResponse {
            stats: DashboardStats {
                total_assets,
                operational_assets,
                assets_in_repair,
                total_maintenances,
                total_areas,
                total_pc_details,
                operational_percentage,
            },
            charts: DashboardCharts {
                assets_by_status,
                assets_by_area,
                maintenances_by_month,
            },
            recent_maintenances,
        })
    }
}
