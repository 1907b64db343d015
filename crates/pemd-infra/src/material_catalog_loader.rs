//! Material catalog loader from TOML configuration

use std::fs;
use std::path::Path;

use pemd_domain::model::{Material, MaterialCatalog};
use pemd_types::{ConfigError, Error, Result};
use serde::Deserialize;
use tracing::debug;

/// Catalog shipped with the binary
pub const DEFAULT_CATALOG_TOML: &str = include_str!("data/materials.toml");

/// Container for parsing materials.toml
#[derive(Debug, Deserialize)]
struct MaterialCatalogConfig {
    materials: Vec<Material>,
}

pub struct MaterialCatalogLoader;

impl MaterialCatalogLoader {
    /// Load materials from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Vec<Material>> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read material catalog file: {}",
                e
            )))
        })?;

        let materials = Self::load_from_str(&content)?;
        debug!(path = %path.display(), count = materials.len(), "material catalog file parsed");
        Ok(materials)
    }

    /// Load materials from a TOML string, keeping file order
    pub fn load_from_str(toml_content: &str) -> Result<Vec<Material>> {
        let config: MaterialCatalogConfig = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse material catalog TOML: {}",
                e
            )))
        })?;

        Ok(config.materials)
    }

    /// Parse and validate into a catalog in one step
    pub fn catalog_from_str(toml_content: &str) -> Result<MaterialCatalog> {
        Ok(MaterialCatalog::from_materials(Self::load_from_str(
            toml_content,
        )?)?)
    }

    /// The built-in catalog
    pub fn default_catalog() -> Result<MaterialCatalog> {
        Self::catalog_from_str(DEFAULT_CATALOG_TOML)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pemd_types::CatalogError;

    const TEST_TOML: &str = r#"
[[materials]]
name = "Béton"
density = 2400.0

[[materials]]
name = "Acier"
density = 7850
"#;

    #[test]
    fn test_load_from_str() {
        let materials = MaterialCatalogLoader::load_from_str(TEST_TOML).unwrap();
        assert_eq!(materials.len(), 2);
        assert_eq!(materials[0].name, "Béton");
        assert_eq!(materials[1].density, 7850.0);
    }

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = MaterialCatalogLoader::default_catalog().unwrap();
        assert!(catalog.len() > 10);
        assert_eq!(catalog.lookup("Béton").unwrap().density, 2400.0);
        assert_eq!(catalog.lookup("Acier").unwrap().density, 7850.0);
        assert_eq!(catalog.materials()[0].name, "Béton");
    }

    #[test]
    fn test_duplicate_fails_at_load() {
        let toml = format!("{}\n[[materials]]\nname = \"Acier\"\ndensity = 7800.0\n", TEST_TOML);
        let err = MaterialCatalogLoader::catalog_from_str(&toml).unwrap_err();
        assert!(matches!(
            err,
            Error::Catalog(CatalogError::DuplicateMaterial(ref name)) if name == "Acier"
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let err = MaterialCatalogLoader::load_from_str("[[materials]]\nname = 3").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = MaterialCatalogLoader::load_from_file(Path::new("/nonexistent/materials.toml"))
            .unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
