//! Error types for pemd-diagnostic

use thiserror::Error;

/// Reasons a volume computation or a commit is refused
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    #[error("Matériau inconnu: {0}")]
    UnknownMaterial(String),

    #[error("Saisie invalide pour {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Computed volume is zero or negative; nothing is added to the ledger
    #[error("Volume nul, aucun élément ajouté")]
    ZeroVolume,
}

impl EstimateError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        EstimateError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Silent rejections leave the ledger untouched without a user-facing error
    pub fn is_silent(&self) -> bool {
        matches!(self, EstimateError::ZeroVolume)
    }
}

/// Material catalog errors, raised once at load time
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Duplicate material in catalog: {0}")]
    DuplicateMaterial(String),

    #[error("Invalid density for {name}: {density}")]
    InvalidDensity { name: String, density: f64 },

    #[error("Material with empty name in catalog")]
    EmptyName,

    #[error("Material catalog is empty")]
    Empty,
}

/// Report export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Aucune donnée à exporter")]
    Empty,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    pub fn is_empty(&self) -> bool {
        matches!(self, ExportError::Empty)
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    Estimate(#[from] EstimateError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
