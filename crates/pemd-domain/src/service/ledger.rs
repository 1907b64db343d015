//! Append-only estimate ledger for one session

use pemd_types::EstimateError;
use serde::Serialize;

use crate::model::{Estimate, MaterialCatalog, VolumeInput};

/// Totals over the ledger, recomputed on every call
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Aggregates {
    pub total_volume: f64,
    pub total_mass: f64,
    pub count: usize,
}

impl Aggregates {
    pub fn from_estimates(estimates: &[Estimate]) -> Self {
        estimates.iter().fold(Self::default(), |acc, e| Self {
            total_volume: acc.total_volume + e.volume(),
            total_mass: acc.total_mass + e.mass(),
            count: acc.count + 1,
        })
    }

    /// Share of the total mass in percent, 0 when the total is 0
    pub fn mass_share_percent(&self, mass: f64) -> f64 {
        if self.total_mass > 0.0 {
            mass / self.total_mass * 100.0
        } else {
            0.0
        }
    }
}

/// Ordered collection of committed estimates. Insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct EstimateLedger {
    estimates: Vec<Estimate>,
}

impl EstimateLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the material, compute the row and append it.
    ///
    /// Nothing is appended on error.
    pub fn commit(
        &mut self,
        catalog: &MaterialCatalog,
        material_name: &str,
        input: VolumeInput,
    ) -> Result<&Estimate, EstimateError> {
        let material = catalog.resolve(material_name)?;
        let estimate = Estimate::new(material, input)?;
        self.estimates.push(estimate);
        Ok(&self.estimates[self.estimates.len() - 1])
    }

    pub fn aggregates(&self) -> Aggregates {
        Aggregates::from_estimates(&self.estimates)
    }

    pub fn estimates(&self) -> &[Estimate] {
        &self.estimates
    }

    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Material;

    fn catalog() -> MaterialCatalog {
        MaterialCatalog::from_materials(vec![
            Material::new("Béton", 2400.0),
            Material::new("Acier", 7850.0),
            Material::new("Terre", 1600.0),
        ])
        .unwrap()
    }

    fn slab() -> VolumeInput {
        VolumeInput::Dimensions {
            length: 2.0,
            width: 1.0,
            height: 0.2,
            multiplier: 1.0,
        }
    }

    fn beams() -> VolumeInput {
        VolumeInput::DirectVolume {
            volume: 0.05,
            multiplier: 3.0,
        }
    }

    #[test]
    fn test_commit_scenarios() {
        let catalog = catalog();
        let mut ledger = EstimateLedger::new();

        let concrete = ledger.commit(&catalog, "Béton", slab()).unwrap();
        assert!((concrete.volume() - 0.4).abs() < 1e-9);
        assert!((concrete.mass() - 960.0).abs() < 1e-6);

        let steel = ledger.commit(&catalog, "Acier", beams()).unwrap();
        assert!((steel.volume() - 0.15).abs() < 1e-9);
        assert!((steel.mass() - 1177.5).abs() < 1e-6);

        let soil = ledger
            .commit(
                &catalog,
                "Terre",
                VolumeInput::Surface {
                    surface: 10.0,
                    thickness: 0.03,
                    multiplier: 1.0,
                },
            )
            .unwrap();
        assert!((soil.volume() - 0.3).abs() < 1e-9);
        assert!((soil.mass() - 480.0).abs() < 1e-6);

        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_aggregates_match_sums() {
        let catalog = catalog();
        let mut ledger = EstimateLedger::new();
        ledger.commit(&catalog, "Béton", slab()).unwrap();
        ledger.commit(&catalog, "Acier", beams()).unwrap();

        let totals = ledger.aggregates();
        assert_eq!(totals.count, 2);
        assert!((totals.total_volume - 0.55).abs() < 1e-9);
        assert!((totals.total_mass - 2137.5).abs() < 1e-6);

        let mass_sum: f64 = ledger.estimates().iter().map(|e| e.mass()).sum();
        assert!((totals.total_mass - mass_sum).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_material_leaves_ledger_untouched() {
        let catalog = catalog();
        let mut ledger = EstimateLedger::new();
        ledger.commit(&catalog, "Béton", slab()).unwrap();

        let err = ledger.commit(&catalog, "Ardoise", slab()).unwrap_err();
        assert_eq!(err, EstimateError::UnknownMaterial("Ardoise".to_string()));
        assert_eq!(ledger.aggregates().count, 1);
    }

    #[test]
    fn test_zero_volume_not_appended() {
        let catalog = catalog();
        let mut ledger = EstimateLedger::new();

        for input in [
            VolumeInput::DirectVolume {
                volume: 0.0,
                multiplier: 1.0,
            },
            VolumeInput::Dimensions {
                length: 3.0,
                width: 0.0,
                height: 1.0,
                multiplier: 2.0,
            },
            VolumeInput::Surface {
                surface: 0.0,
                thickness: 0.1,
                multiplier: 1.0,
            },
            VolumeInput::Unit {
                unit_volume: 0.0,
                multiplier: 5.0,
            },
        ] {
            let err = ledger.commit(&catalog, "Béton", input).unwrap_err();
            assert!(err.is_silent());
        }
        assert_eq!(ledger.aggregates().count, 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_invalid_input_not_appended() {
        let catalog = catalog();
        let mut ledger = EstimateLedger::new();
        let err = ledger
            .commit(
                &catalog,
                "Terre",
                VolumeInput::Surface {
                    surface: 10.0,
                    thickness: 0.02,
                    multiplier: 1.0,
                },
            )
            .unwrap_err();
        assert!(matches!(err, EstimateError::InvalidInput { .. }));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_overflow_not_appended() {
        let catalog = catalog();
        let mut ledger = EstimateLedger::new();
        ledger.commit(&catalog, "Acier", beams()).unwrap();

        let err = ledger
            .commit(
                &catalog,
                "Acier",
                VolumeInput::Dimensions {
                    length: 1e110,
                    width: 1e110,
                    height: 1e110,
                    multiplier: 1.0,
                },
            )
            .unwrap_err();
        assert!(matches!(err, EstimateError::InvalidInput { .. }));

        let totals = ledger.aggregates();
        assert_eq!(totals.count, 1);
        assert!(totals.total_mass.is_finite());
    }

    #[test]
    fn test_mass_share_zero_total() {
        let totals = Aggregates::default();
        assert_eq!(totals.mass_share_percent(10.0), 0.0);
    }
}
