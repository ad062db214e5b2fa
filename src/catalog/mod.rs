//! Purchase catalogs - equipment on sale and contracts on offer
//!
//! Catalogs are read-only stock the ledger buys from. Each ships with
//! hardcoded defaults and can alternatively be loaded from TOML files
//! under data/.

pub mod campaigns;
pub mod equipment;

pub use campaigns::CampaignCatalog;
pub use equipment::EquipmentCatalog;

/// Error type for catalog loading
#[derive(Debug, Clone)]
pub enum CatalogLoadError {
    IoError(String),
    ParseError(String),
    InvalidKind(String),
    InvalidMissionKind(String),
    InvalidDifficulty(String),
}

impl std::fmt::Display for CatalogLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogLoadError::IoError(e) => write!(f, "IO error: {}", e),
            CatalogLoadError::ParseError(e) => write!(f, "Parse error: {}", e),
            CatalogLoadError::InvalidKind(e) => write!(f, "Invalid equipment kind: {}", e),
            CatalogLoadError::InvalidMissionKind(e) => write!(f, "Invalid mission kind: {}", e),
            CatalogLoadError::InvalidDifficulty(e) => write!(f, "Invalid difficulty: {}", e),
        }
    }
}

impl std::error::Error for CatalogLoadError {}
