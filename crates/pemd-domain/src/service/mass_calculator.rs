//! Mass calculation from volume and density

use crate::model::Material;

/// mass (kg) = volume (m³) × material density (kg/m³)
pub fn calculate_mass(volume_m3: f64, material: &Material) -> f64 {
    calculate_mass_explicit(volume_m3, material.density)
}

pub fn calculate_mass_explicit(volume_m3: f64, density: f64) -> f64 {
    volume_m3 * density
}
