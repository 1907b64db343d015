//! Domain model types

pub mod estimate;
pub mod material;
pub mod volume_input;

pub use estimate::Estimate;
pub use material::{Material, MaterialCatalog};
pub use volume_input::{InputMode, RawFields, VolumeInput};
