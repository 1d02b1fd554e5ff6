//! API integration tests
//!
//! These run against a live server (cargo run) with a migrated database:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

use inventario_server::services::export::{CSV_HEADER, UTF8_BOM};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Unique serial suffix so test runs do not collide
fn unique(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}-{}", prefix, nanos)
}

async fn create_area(client: &Client, name: &str) -> i64 {
    let response = client
        .post(format!("{}/areas", BASE_URL))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to create area");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse area");
    body["id"].as_i64().expect("No area ID")
}

async fn create_asset(client: &Client, serial: &str, area_id: Option<i64>) -> i64 {
    let response = client
        .post(format!("{}/assets", BASE_URL))
        .json(&json!({
            "asset_type": "PC",
            "brand": "Dell",
            "model": "OptiPlex 7090",
            "serial_number": serial,
            "status": "Operativo",
            "area_id": area_id
        }))
        .send()
        .await
        .expect("Failed to create asset");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse asset");
    body["id"].as_i64().expect("No asset ID")
}

async fn create_detail(client: &Client, asset_id: i64, ip: Option<&str>) -> i64 {
    let response = client
        .post(format!("{}/pc-details", BASE_URL))
        .json(&json!({
            "asset_id": asset_id,
            "cpu": "Intel i7",
            "ram_gb": 16,
            "storage": "512GB SSD",
            "os": "Windows 11",
            "ip_address": ip,
            "mac_address": "00:11:22:33:44:55"
        }))
        .send()
        .await
        .expect("Failed to create detail");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse detail");
    body["id"].as_i64().expect("No detail ID")
}

async fn fetch_export(client: &Client) -> (reqwest::StatusCode, String, String) {
    let response = client
        .get(format!("{}/pc-details/export", BASE_URL))
        .send()
        .await
        .expect("Failed to request export");
    let status = response.status();
    let disposition = response
        .headers()
        .get("content-disposition")
        .map(|v| v.to_str().unwrap_or_default().to_string())
        .unwrap_or_default();
    let body = response.text().await.expect("Failed to read export body");
    (status, disposition, body)
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_area_crud() {
    let client = Client::new();
    let name = unique("Sala");

    let area_id = create_area(&client, &name).await;

    let response = client
        .get(format!("{}/areas/{}", BASE_URL, area_id))
        .send()
        .await
        .expect("Failed to get area");
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["name"], name.as_str());

    let response = client
        .put(format!("{}/areas/{}", BASE_URL, area_id))
        .json(&json!({ "name": format!("{}-renamed", name), "physical_location": "Piso 2" }))
        .send()
        .await
        .expect("Failed to update area");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/areas?search={}", BASE_URL, name))
        .send()
        .await
        .expect("Failed to search areas");
    let body: Value = response.json().await.unwrap();
    assert!(body["items"].as_array().unwrap().iter().any(|a| a["id"] == area_id));

    let response = client
        .delete(format!("{}/areas/{}", BASE_URL, area_id))
        .send()
        .await
        .expect("Failed to delete area");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_serial_is_conflict() {
    let client = Client::new();
    let serial = unique("DUP");

    create_asset(&client, &serial, None).await;

    let response = client
        .post(format!("{}/assets", BASE_URL))
        .json(&json!({
            "asset_type": "PC",
            "brand": "HP",
            "model": "ProBook 450",
            "serial_number": serial,
            "status": "Operativo"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_unknown_asset_type_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/assets", BASE_URL))
        .json(&json!({
            "asset_type": "Tostadora",
            "brand": "Acme",
            "model": "T-1000",
            "serial_number": unique("BAD"),
            "status": "Operativo"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_export_contains_created_inventory() {
    let client = Client::new();
    let serial = unique("SN123456");

    let area_id = create_area(&client, "IT Department").await;
    let asset_id = create_asset(&client, &serial, Some(area_id)).await;
    create_detail(&client, asset_id, Some("192.168.1.100")).await;

    let (status, disposition, body) = fetch_export(&client).await;
    assert_eq!(status, 200);

    // Attachment filename carries the generation date
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    assert!(disposition.contains(&format!("inventario_pc_{}", today)));

    // Body starts with the UTF-8 BOM, then the fixed header row
    assert!(body.as_bytes().starts_with(&UTF8_BOM));
    let first_line = body.trim_start_matches('\u{feff}').lines().next().unwrap();
    assert_eq!(first_line, CSV_HEADER.join(","));

    // The created inventory appears in one row
    let row = body
        .lines()
        .find(|l| l.contains(&serial))
        .expect("Exported row for created asset not found");
    assert!(row.contains("Dell"));
    assert!(row.contains("OptiPlex 7090"));
    assert!(row.contains("Intel i7"));
    assert!(row.contains("192.168.1.100"));
    assert!(row.contains("IT Department"));
}

#[tokio::test]
#[ignore]
async fn test_export_unassigned_area_placeholder() {
    let client = Client::new();
    let serial = unique("NOAREA");

    let asset_id = create_asset(&client, &serial, None).await;
    create_detail(&client, asset_id, Some("10.0.0.1")).await;

    let (status, _, body) = fetch_export(&client).await;
    assert_eq!(status, 200);

    let row = body
        .lines()
        .find(|l| l.contains(&serial))
        .expect("Exported row not found");
    assert!(row.contains("No asignada"));
}

#[tokio::test]
#[ignore]
async fn test_export_null_ip_yields_well_formed_row() {
    let client = Client::new();
    let serial = unique("NOIP");

    let asset_id = create_asset(&client, &serial, None).await;
    create_detail(&client, asset_id, None).await;

    let (status, _, body) = fetch_export(&client).await;
    assert_eq!(status, 200);

    let row = body
        .lines()
        .find(|l| l.contains(&serial))
        .expect("Exported row not found");
    // None of the seeded values embed commas, so field count is the
    // comma count plus one
    assert_eq!(row.split(',').count(), CSV_HEADER.len());
}

#[tokio::test]
#[ignore]
async fn test_report_ascends_while_export_descends() {
    let client = Client::new();
    let serial_a = unique("ORD-A");
    let serial_b = unique("ORD-B");

    let asset_a = create_asset(&client, &serial_a, None).await;
    let asset_b = create_asset(&client, &serial_b, None).await;
    let detail_a = create_detail(&client, asset_a, None).await;
    let detail_b = create_detail(&client, asset_b, None).await;
    assert!(detail_a < detail_b);

    // Report: ascending by detail id
    let response = client
        .get(format!("{}/pc-details/report", BASE_URL))
        .send()
        .await
        .expect("Failed to request report");
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    let ids: Vec<i64> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_i64().unwrap())
        .collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    assert!(body["date"].as_str().unwrap().len() == 10); // DD/MM/YYYY

    // Export: descending, so the later detail comes first
    let (_, _, csv) = fetch_export(&client).await;
    let pos_a = csv.find(&serial_a).expect("serial A not exported");
    let pos_b = csv.find(&serial_b).expect("serial B not exported");
    assert!(pos_b < pos_a);
}

#[tokio::test]
#[ignore]
async fn test_detail_rejected_for_incompatible_type() {
    let client = Client::new();

    let response = client
        .post(format!("{}/assets", BASE_URL))
        .json(&json!({
            "asset_type": "Impresora",
            "brand": "Epson",
            "model": "L3250",
            "serial_number": unique("PRN"),
            "status": "Operativo"
        }))
        .send()
        .await
        .expect("Failed to create printer");
    assert_eq!(response.status(), 201);
    let printer: Value = response.json().await.unwrap();

    let response = client
        .post(format!("{}/pc-details", BASE_URL))
        .json(&json!({
            "asset_id": printer["id"],
            "cpu": "n/a",
            "ram_gb": 1,
            "storage": "n/a",
            "os": "n/a"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_available_assets_excludes_detailed_ones() {
    let client = Client::new();
    let serial = unique("AVAIL");

    let asset_id = create_asset(&client, &serial, None).await;

    let response = client
        .get(format!("{}/pc-details/available-assets", BASE_URL))
        .send()
        .await
        .expect("Failed to list available assets");
    let body: Value = response.json().await.unwrap();
    assert!(body.as_array().unwrap().iter().any(|a| a["id"] == asset_id));

    create_detail(&client, asset_id, None).await;

    let response = client
        .get(format!("{}/pc-details/available-assets", BASE_URL))
        .send()
        .await
        .expect("Failed to list available assets");
    let body: Value = response.json().await.unwrap();
    assert!(!body.as_array().unwrap().iter().any(|a| a["id"] == asset_id));
}

#[tokio::test]
#[ignore]
async fn test_dashboard_overview() {
    let client = Client::new();

    let response = client
        .get(format!("{}/dashboard", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["stats"]["total_assets"].is_number());
    assert!(body["stats"]["operational_percentage"].is_number());
    assert!(body["charts"]["assets_by_status"].is_array());
    assert!(body["recent_maintenances"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_maintenance_next_date_must_follow_service_date() {
    let client = Client::new();
    let asset_id = create_asset(&client, &unique("MNT"), None).await;

    let response = client
        .post(format!("{}/maintenances", BASE_URL))
        .json(&json!({
            "asset_id": asset_id,
            "service_date": "2026-02-10",
            "technician": "L. Ramos",
            "description": "Cambio de pasta térmica",
            "next_service_date": "2026-01-10"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let response = client
        .post(format!("{}/maintenances", BASE_URL))
        .json(&json!({
            "asset_id": asset_id,
            "service_date": "2026-02-10",
            "technician": "L. Ramos",
            "description": "Cambio de pasta térmica",
            "next_service_date": "2026-08-10"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
}

#[tokio::test]
#[ignore]
async fn test_backup_download() {
    let client = Client::new();

    let response = client
        .get(format!("{}/backup/download", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/sql"
    );
    let disposition = response
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("backup_"));

    let body = response.text().await.expect("Failed to read dump");
    assert!(!body.is_empty());
}
