//! Estimate session
//!
//! One session owns one catalog and one ledger. Shells create a session per
//! user/request; nothing is shared between sessions.

use chrono::NaiveDateTime;
use pemd_domain::model::{Estimate, MaterialCatalog, VolumeInput};
use pemd_domain::repository::MaterialRepository;
use pemd_domain::service::{calculate_mass, compute_volume, Aggregates, EstimateLedger};
use pemd_infra::persistence::{BuiltinMaterialRepository, FileMaterialRepository};
use pemd_infra::render_report;
use pemd_types::{EstimateError, ExportError, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;

/// Recap table line shown after every commit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub material: String,
    pub multiplier: f64,
    pub volume: f64,
    pub mass: f64,
    pub density: f64,
}

impl From<&Estimate> for SummaryRow {
    fn from(e: &Estimate) -> Self {
        Self {
            material: e.material_name().to_string(),
            multiplier: e.multiplier(),
            volume: e.volume(),
            mass: e.mass(),
            density: e.density(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EstimateSession {
    catalog: MaterialCatalog,
    ledger: EstimateLedger,
}

impl EstimateSession {
    pub fn new(catalog: MaterialCatalog) -> Self {
        Self {
            catalog,
            ledger: EstimateLedger::new(),
        }
    }

    /// Build the catalog from any material source
    pub fn from_repository(repo: &dyn MaterialRepository) -> Result<Self> {
        let catalog = MaterialCatalog::from_materials(repo.find_all()?)?;
        debug!(materials = catalog.len(), "material catalog loaded");
        Ok(Self::new(catalog))
    }

    /// Use the configured catalog file, or the built-in catalog
    pub fn open(config: &Config) -> Result<Self> {
        match &config.catalog_path {
            Some(path) => {
                info!(path = %path.display(), "loading material catalog");
                Self::from_repository(&FileMaterialRepository::new(path.clone())?)
            }
            None => Self::from_repository(&BuiltinMaterialRepository),
        }
    }

    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    /// Volume for the current inputs, without touching the ledger
    pub fn preview(&self, input: &VolumeInput) -> std::result::Result<f64, EstimateError> {
        compute_volume(input)
    }

    /// (volume, mass) for the current inputs, without touching the ledger
    pub fn preview_mass(
        &self,
        material_name: &str,
        input: &VolumeInput,
    ) -> std::result::Result<(f64, f64), EstimateError> {
        let material = self.catalog.resolve(material_name)?;
        let volume = compute_volume(input)?;
        Ok((volume, calculate_mass(volume, material)))
    }

    /// Add a row to the ledger
    pub fn commit(
        &mut self,
        material_name: &str,
        input: VolumeInput,
    ) -> std::result::Result<&Estimate, EstimateError> {
        match self.ledger.commit(&self.catalog, material_name, input) {
            Ok(estimate) => {
                info!(
                    material = estimate.material_name(),
                    mode = %estimate.mode(),
                    volume = estimate.volume(),
                    mass = estimate.mass(),
                    "estimate added"
                );
                Ok(estimate)
            }
            Err(e) if e.is_silent() => {
                debug!(material = material_name, "zero volume, nothing added");
                Err(e)
            }
            Err(e) => {
                warn!(material = material_name, error = %e, "estimate rejected");
                Err(e)
            }
        }
    }

    pub fn estimates(&self) -> &[Estimate] {
        self.ledger.estimates()
    }

    pub fn aggregates(&self) -> Aggregates {
        self.ledger.aggregates()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        self.ledger.estimates().iter().map(SummaryRow::from).collect()
    }

    /// CSV report text; `ExportError::Empty` when nothing was added
    pub fn export_report(
        &self,
        generated_at: NaiveDateTime,
    ) -> std::result::Result<String, ExportError> {
        render_report(self.ledger.estimates(), generated_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pemd_domain::model::Material;

    fn session() -> EstimateSession {
        let catalog = MaterialCatalog::from_materials(vec![
            Material::new("Béton", 2400.0),
            Material::new("Acier", 7850.0),
        ])
        .unwrap();
        EstimateSession::new(catalog)
    }

    #[test]
    fn test_preview_does_not_commit() {
        let session = session();
        let input = VolumeInput::DirectVolume {
            volume: 0.05,
            multiplier: 3.0,
        };
        let (volume, mass) = session.preview_mass("Acier", &input).unwrap();
        assert!((volume - 0.15).abs() < 1e-9);
        assert!((mass - 1177.5).abs() < 1e-6);
        assert!((session.preview(&input).unwrap() - 0.15).abs() < 1e-9);
        assert!(session.is_empty());
    }

    #[test]
    fn test_commit_and_summary() {
        let mut session = session();
        session
            .commit(
                "Béton",
                VolumeInput::Dimensions {
                    length: 2.0,
                    width: 1.0,
                    height: 0.2,
                    multiplier: 1.0,
                },
            )
            .unwrap();

        let rows = session.summary_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].material, "Béton");
        assert_eq!(rows[0].density, 2400.0);
        assert!((rows[0].mass - 960.0).abs() < 1e-6);
    }

    #[test]
    fn test_export_empty_session() {
        let session = session();
        let now = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(session.export_report(now).unwrap_err().is_empty());
    }

    #[test]
    fn test_open_with_builtin_catalog() {
        let session = EstimateSession::open(&Config::default()).unwrap();
        assert!(session.catalog().lookup("Béton").is_some());
    }
}
