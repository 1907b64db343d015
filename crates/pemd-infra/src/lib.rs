//! Infrastructure layer - material catalog loader, CSV report writer

pub mod material_catalog_loader;
pub mod persistence;
pub mod report_csv;

pub use material_catalog_loader::MaterialCatalogLoader;
pub use report_csv::{render_report, report_file_name, write_report};
