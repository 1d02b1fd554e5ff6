//! Shared domain vocabularies (asset types and statuses)
//!
//! Types and statuses are stored as validated text, keeping the Spanish
//! labels the original inventory used on its wire and in its exports.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// AssetType
// ---------------------------------------------------------------------------

/// Hardware asset classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AssetType {
    #[serde(rename = "PC")]
    Pc,
    Laptop,
    #[serde(rename = "Servidor")]
    Server,
    #[serde(rename = "All-in-One")]
    AllInOne,
    #[serde(rename = "Impresora")]
    Printer,
    Scanner,
    Monitor,
    #[serde(rename = "Proyector")]
    Projector,
    Switch,
    Router,
    Firewall,
    #[serde(rename = "UPS")]
    Ups,
    #[serde(rename = "Otro")]
    Other,
}

impl AssetType {
    pub const ALL: [AssetType; 13] = [
        AssetType::Pc,
        AssetType::Laptop,
        AssetType::Server,
        AssetType::AllInOne,
        AssetType::Printer,
        AssetType::Scanner,
        AssetType::Monitor,
        AssetType::Projector,
        AssetType::Switch,
        AssetType::Router,
        AssetType::Firewall,
        AssetType::Ups,
        AssetType::Other,
    ];

    /// Stored / exported label for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Pc => "PC",
            AssetType::Laptop => "Laptop",
            AssetType::Server => "Servidor",
            AssetType::AllInOne => "All-in-One",
            AssetType::Printer => "Impresora",
            AssetType::Scanner => "Scanner",
            AssetType::Monitor => "Monitor",
            AssetType::Projector => "Proyector",
            AssetType::Switch => "Switch",
            AssetType::Router => "Router",
            AssetType::Firewall => "Firewall",
            AssetType::Ups => "UPS",
            AssetType::Other => "Otro",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }

    /// Whether assets of this type can own a PC specification record
    pub fn supports_pc_detail(&self) -> bool {
        matches!(
            self,
            AssetType::Pc | AssetType::Laptop | AssetType::Server | AssetType::AllInOne
        )
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AssetStatus
// ---------------------------------------------------------------------------

/// Operational status of a hardware asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AssetStatus {
    #[serde(rename = "Operativo")]
    Operational,
    #[serde(rename = "En Reparación")]
    InRepair,
    #[serde(rename = "Baja")]
    Decommissioned,
    #[serde(rename = "En Mantenimiento")]
    InMaintenance,
    #[serde(rename = "Dañado")]
    Damaged,
    #[serde(rename = "Reservado")]
    Reserved,
}

impl AssetStatus {
    pub const ALL: [AssetStatus; 6] = [
        AssetStatus::Operational,
        AssetStatus::InRepair,
        AssetStatus::Decommissioned,
        AssetStatus::InMaintenance,
        AssetStatus::Damaged,
        AssetStatus::Reserved,
    ];

    /// Stored / exported label for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Operational => "Operativo",
            AssetStatus::InRepair => "En Reparación",
            AssetStatus::Decommissioned => "Baja",
            AssetStatus::InMaintenance => "En Mantenimiento",
            AssetStatus::Damaged => "Dañado",
            AssetStatus::Reserved => "Reservado",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_type_labels_round_trip() {
        for t in AssetType::ALL {
            assert_eq!(AssetType::parse(t.as_str()), Some(t));
        }
        assert_eq!(AssetType::parse("Tostadora"), None);
    }

    #[test]
    fn pc_detail_compatibility() {
        assert!(AssetType::Pc.supports_pc_detail());
        assert!(AssetType::Laptop.supports_pc_detail());
        assert!(AssetType::Server.supports_pc_detail());
        assert!(AssetType::AllInOne.supports_pc_detail());
        assert!(!AssetType::Printer.supports_pc_detail());
        assert!(!AssetType::Router.supports_pc_detail());
    }

    #[test]
    fn asset_status_labels_round_trip() {
        for s in AssetStatus::ALL {
            assert_eq!(AssetStatus::parse(s.as_str()), Some(s));
        }
        assert_eq!(AssetStatus::parse("Perdido"), None);
    }
}
