//! TOML-backed implementations of MaterialRepository

use std::path::PathBuf;

use pemd_domain::model::Material;
use pemd_domain::repository::MaterialRepository;
use pemd_types::Error;

use crate::material_catalog_loader::{MaterialCatalogLoader, DEFAULT_CATALOG_TOML};

/// Catalog read from a user TOML file
pub struct FileMaterialRepository {
    materials: Vec<Material>,
}

impl FileMaterialRepository {
    /// Create a new repository from a TOML file path
    pub fn new(toml_path: PathBuf) -> Result<Self, Error> {
        let materials = MaterialCatalogLoader::load_from_file(&toml_path)?;
        Ok(Self { materials })
    }
}

impl MaterialRepository for FileMaterialRepository {
    fn find_all(&self) -> Result<Vec<Material>, Error> {
        Ok(self.materials.clone())
    }
}

/// Catalog embedded in the binary
#[derive(Debug, Default)]
pub struct BuiltinMaterialRepository;

impl MaterialRepository for BuiltinMaterialRepository {
    fn find_all(&self) -> Result<Vec<Material>, Error> {
        MaterialCatalogLoader::load_from_str(DEFAULT_CATALOG_TOML)
    }
}
