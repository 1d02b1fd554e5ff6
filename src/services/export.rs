//! PC inventory export service: CSV download and report payload.
//!
//! The CSV side is split into pure pieces (projection, record encoding,
//! filename) and a streaming shell, so the format can be tested without a
//! database. The report side reuses the joined repository query.

use axum::body::Body;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use sqlx::FromRow;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::StreamExt;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::pc_detail::PcDetailWithAsset,
    repository::{pc_details::DetailOrder, Repository},
};

/// UTF-8 byte-order mark, so spreadsheet tools detect the encoding
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Placeholder for an asset without an area assignment
pub const NO_AREA_PLACEHOLDER: &str = "No asignada";

/// Fixed CSV header. Column order must match [`project_row`].
pub const CSV_HEADER: [&str; 15] = [
    "ID",
    "Tipo",
    "Marca",
    "Modelo",
    "Serial",
    "Estado",
    "Area",
    "CPU",
    "RAM (GB)",
    "Almacenamiento",
    "OS",
    "IP",
    "MAC",
    "AnyDesk",
    "TeamViewer",
];

/// Export query: one row per detail, newest-first, with the asset and the
/// asset's area joined in.
const EXPORT_QUERY: &str = r#"
SELECT a.id AS asset_id, a.asset_type, a.brand, a.model, a.serial_number,
       a.status, ar.name AS area_name,
       d.cpu, d.ram_gb, d.storage, d.os, d.ip_address, d.mac_address,
       d.anydesk_id, d.teamviewer_id
FROM pc_details d
LEFT JOIN hardware_assets a ON d.asset_id = a.id
LEFT JOIN areas ar ON a.area_id = ar.id
ORDER BY d.id DESC
"#;

/// One joined row of the export query
#[derive(Debug, Clone, Default, FromRow)]
pub struct ExportRow {
    pub asset_id: Option<i32>,
    pub asset_type: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub status: Option<String>,
    pub area_name: Option<String>,
    pub cpu: Option<String>,
    pub ram_gb: Option<i32>,
    pub storage: Option<String>,
    pub os: Option<String>,
    pub ip_address: Option<String>,
    pub mac_address: Option<String>,
    pub anydesk_id: Option<String>,
    pub teamviewer_id: Option<String>,
}

/// A ready-to-send CSV export: attachment filename plus streamed body
pub struct CsvExport {
    pub filename: String,
    pub body: Body,
}

/// Report payload handed to the printable view
#[derive(Debug, Serialize, ToSchema)]
pub struct PcReport {
    pub details: Vec<PcDetailWithAsset>,
    /// Generation date, DD/MM/YYYY
    pub date: String,
}

/// Project a joined row into the fixed 15-column field list.
///
/// Missing values render as empty strings, except the area column: an asset
/// without an area renders the placeholder, while a missing asset leaves the
/// area (and every other asset-derived column) empty.
pub fn project_row(row: &ExportRow) -> [String; 15] {
    let text = |v: &Option<String>| v.clone().unwrap_or_default();
    let area = match (row.asset_id, &row.area_name) {
        (None, _) => String::new(),
        (Some(_), Some(name)) => name.clone(),
        (Some(_), None) => NO_AREA_PLACEHOLDER.to_string(),
    };
    [
        row.asset_id.map(|id| id.to_string()).unwrap_or_default(),
        text(&row.asset_type),
        text(&row.brand),
        text(&row.model),
        text(&row.serial_number),
        text(&row.status),
        area,
        text(&row.cpu),
        row.ram_gb.map(|v| v.to_string()).unwrap_or_default(),
        text(&row.storage),
        text(&row.os),
        text(&row.ip_address),
        text(&row.mac_address),
        text(&row.anydesk_id),
        text(&row.teamviewer_id),
    ]
}

/// Encode one record as a CSV line (RFC-style quoting, trailing newline)
pub fn encode_record<I, S>(fields: I) -> Result<Vec<u8>, csv::Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(fields)?;
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

/// Attachment filename for an export generated on the given date
pub fn csv_filename(date: NaiveDate) -> String {
    format!("inventario_pc_{}.csv", date.format("%Y-%m-%d"))
}

/// Human-formatted generation date for the report payload
pub fn report_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[derive(Clone)]
pub struct ExportService {
    repository: Repository,
}

impl ExportService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Build the streamed CSV export of the whole PC inventory.
    ///
    /// Rows are fetched as a database stream and encoded chunk-by-chunk into
    /// a bounded channel feeding the response body, so the document is never
    /// materialized in memory. A failure mid-stream aborts the body.
    pub async fn csv_export(&self) -> AppResult<CsvExport> {
        let filename = csv_filename(Local::now().date_naive());
        let (tx, rx) = tokio::sync::mpsc::channel::<Result<Vec<u8>, crate::AppError>>(16);
        let pool = self.repository.pool.clone();

        tokio::spawn(async move {
            let mut head = UTF8_BOM.to_vec();
            match encode_record(CSV_HEADER) {
                Ok(header) => head.extend_from_slice(&header),
                Err(e) => {
                    let _ = tx.send(Err(e.into())).await;
                    return;
                }
            }
            if tx.send(Ok(head)).await.is_err() {
                return;
            }

            let mut rows = sqlx::query_as::<_, ExportRow>(EXPORT_QUERY).fetch(&pool);
            loop {
                match rows.next().await {
                    Some(Ok(row)) => {
                        let chunk = match encode_record(&project_row(&row)) {
                            Ok(chunk) => chunk,
                            Err(e) => {
                                let _ = tx.send(Err(e.into())).await;
                                return;
                            }
                        };
                        // A closed receiver means the client went away
                        if tx.send(Ok(chunk)).await.is_err() {
                            return;
                        }
                    }
                    Some(Err(e)) => {
                        let _ = tx.send(Err(e.into())).await;
                        return;
                    }
                    None => return,
                }
            }
        });

        Ok(CsvExport {
            filename,
            body: Body::from_stream(ReceiverStream::new(rx)),
        })
    }

    /// Build the report payload: all details ascending by id, plus the
    /// formatted generation date. Ordering intentionally differs from the
    /// CSV export (ascending vs. descending).
    pub async fn report(&self) -> AppResult<PcReport> {
        let details = self
            .repository
            .pc_details
            .list_with_assets(DetailOrder::IdAscending)
            .await?;
        Ok(PcReport {
            details,
            date: report_date(Local::now().date_naive()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_row() -> ExportRow {
        ExportRow {
            asset_id: Some(7),
            asset_type: Some("PC".into()),
            brand: Some("Dell".into()),
            model: Some("OptiPlex 7090".into()),
            serial_number: Some("SN123456".into()),
            status: Some("Operativo".into()),
            area_name: Some("IT Department".into()),
            cpu: Some("Intel i7".into()),
            ram_gb: Some(16),
            storage: Some("512GB SSD".into()),
            os: Some("Windows 11".into()),
            ip_address: Some("192.168.1.100".into()),
            mac_address: Some("00:11:22:33:44:55".into()),
            anydesk_id: Some("123456789".into()),
            teamviewer_id: None,
        }
    }

    #[test]
    fn header_has_fifteen_fixed_columns() {
        assert_eq!(CSV_HEADER.len(), 15);
        assert_eq!(CSV_HEADER[0], "ID");
        assert_eq!(CSV_HEADER[6], "Area");
        assert_eq!(CSV_HEADER[8], "RAM (GB)");
        assert_eq!(CSV_HEADER[14], "TeamViewer");
    }

    #[test]
    fn projects_full_row_in_header_order() {
        let fields = project_row(&full_row());
        assert_eq!(fields.len(), CSV_HEADER.len());
        assert_eq!(fields[0], "7");
        assert_eq!(fields[1], "PC");
        assert_eq!(fields[2], "Dell");
        assert_eq!(fields[3], "OptiPlex 7090");
        assert_eq!(fields[4], "SN123456");
        assert_eq!(fields[5], "Operativo");
        assert_eq!(fields[6], "IT Department");
        assert_eq!(fields[7], "Intel i7");
        assert_eq!(fields[8], "16");
        assert_eq!(fields[11], "192.168.1.100");
        // Missing optional value renders empty, not omitted
        assert_eq!(fields[14], "");
    }

    #[test]
    fn asset_without_area_renders_placeholder() {
        let row = ExportRow {
            area_name: None,
            ..full_row()
        };
        assert_eq!(project_row(&row)[6], "No asignada");
    }

    #[test]
    fn missing_asset_leaves_all_asset_columns_empty() {
        let row = ExportRow {
            asset_id: None,
            asset_type: None,
            brand: None,
            model: None,
            serial_number: None,
            status: None,
            area_name: None,
            ..full_row()
        };
        let fields = project_row(&row);
        for field in &fields[0..7] {
            assert_eq!(field, "");
        }
        // Detail columns are untouched
        assert_eq!(fields[7], "Intel i7");
    }

    #[test]
    fn null_ip_yields_well_formed_row() {
        let row = ExportRow {
            ip_address: None,
            ..full_row()
        };
        let fields = project_row(&row);
        assert_eq!(fields.len(), 15);
        assert_eq!(fields[11], "");
    }

    #[test]
    fn encodes_with_standard_quoting() {
        let line = encode_record(["plain", "has,comma", "has\"quote", "has\nnewline"]).unwrap();
        let text = String::from_utf8(line).unwrap();
        assert_eq!(text, "plain,\"has,comma\",\"has\"\"quote\",\"has\nnewline\"\n");
    }

    #[test]
    fn bom_is_three_utf8_marker_bytes() {
        assert_eq!(UTF8_BOM, [0xEF, 0xBB, 0xBF]);
    }

    #[test]
    fn filename_carries_iso_date() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 12).unwrap();
        assert_eq!(csv_filename(date), "inventario_pc_2026-02-12.csv");
    }

    #[test]
    fn report_date_is_day_month_year() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 12).unwrap();
        assert_eq!(report_date(date), "12/02/2026");
    }
}
