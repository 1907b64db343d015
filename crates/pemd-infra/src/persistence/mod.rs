//! Persistence implementations
//!
//! This module provides file-based implementations of the repository traits.

mod file_material_repo;

pub use file_material_repo::{BuiltinMaterialRepository, FileMaterialRepository};
