//! Data models for Inventario

pub mod area;
pub mod asset;
pub mod document;
pub mod enums;
pub mod maintenance;
pub mod pc_detail;

// Re-export commonly used types
pub use area::{Area, AreaSummary};
pub use asset::{AssetSummary, AssetWithArea, HardwareAsset};
pub use document::Document;
pub use enums::{AssetStatus, AssetType};
pub use maintenance::{Maintenance, MaintenanceWithAsset};
pub use pc_detail::{PcDetail, PcDetailWithAsset};
