//! Material catalog type definitions

use std::collections::HashMap;

use pemd_types::{CatalogError, EstimateError};
use serde::{Deserialize, Serialize};

/// Catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Display name, unique within a catalog
    pub name: String,
    /// Density in kg/m³
    pub density: f64,
}

impl Material {
    pub fn new(name: impl Into<String>, density: f64) -> Self {
        Self {
            name: name.into(),
            density,
        }
    }
}

/// Read-only lookup table of materials, validated once at construction
#[derive(Debug, Clone)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
    index: HashMap<String, usize>,
}

impl MaterialCatalog {
    /// Build a catalog, failing on duplicate names or non-positive densities
    pub fn from_materials(materials: Vec<Material>) -> Result<Self, CatalogError> {
        if materials.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(materials.len());
        for (pos, material) in materials.iter().enumerate() {
            if material.name.trim().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if !material.density.is_finite() || material.density <= 0.0 {
                return Err(CatalogError::InvalidDensity {
                    name: material.name.clone(),
                    density: material.density,
                });
            }
            if index.insert(material.name.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateMaterial(material.name.clone()));
            }
        }

        Ok(Self { materials, index })
    }

    /// Look up a material by exact name
    pub fn lookup(&self, name: &str) -> Option<&Material> {
        self.index.get(name).map(|&pos| &self.materials[pos])
    }

    /// Like `lookup`, but as a commit-time error
    pub fn resolve(&self, name: &str) -> Result<&Material, EstimateError> {
        self.lookup(name)
            .ok_or_else(|| EstimateError::UnknownMaterial(name.to_string()))
    }

    /// Materials in catalog order
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.materials.iter().map(|m| m.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
