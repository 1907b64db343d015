//! Repository trait definitions for material sources

use pemd_types::Error;

use crate::model::Material;

/// Source of catalog materials
pub trait MaterialRepository {
    /// Load all materials in source order
    fn find_all(&self) -> Result<Vec<Material>, Error>;
}
