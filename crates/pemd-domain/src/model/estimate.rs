//! Committed estimate rows

use pemd_types::EstimateError;
use serde::Serialize;

use super::{InputMode, Material, VolumeInput};
use crate::service::mass_calculator::calculate_mass;
use crate::service::volume_calculator::compute_volume;

/// One committed material/volume/mass row. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    material_name: String,
    /// Density captured at commit time (kg/m³)
    density: f64,
    input: VolumeInput,
    /// m³, multiplier applied
    volume: f64,
    /// kg
    mass: f64,
}

impl Estimate {
    /// Compute volume and mass for a material. Zero volume is refused.
    pub fn new(material: &Material, input: VolumeInput) -> Result<Self, EstimateError> {
        let volume = compute_volume(&input)?;
        if volume <= 0.0 {
            return Err(EstimateError::ZeroVolume);
        }

        let mass = calculate_mass(volume, material);
        if !mass.is_finite() {
            return Err(EstimateError::invalid("mass", "not a finite number"));
        }

        Ok(Self {
            material_name: material.name.clone(),
            density: material.density,
            input,
            volume,
            mass,
        })
    }

    pub fn material_name(&self) -> &str {
        &self.material_name
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn input(&self) -> &VolumeInput {
        &self.input
    }

    pub fn mode(&self) -> InputMode {
        self.input.mode()
    }

    pub fn multiplier(&self) -> f64 {
        self.input.multiplier()
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }
}
