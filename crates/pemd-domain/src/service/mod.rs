//! Domain services

pub mod ledger;
pub mod mass_calculator;
pub mod report;
pub mod volume_calculator;

pub use ledger::{Aggregates, EstimateLedger};
pub use mass_calculator::{calculate_mass, calculate_mass_explicit};
pub use report::{build_report, Report, ReportRow, REPORT_HEADERS, REPORT_TITLE};
pub use volume_calculator::{compute_volume, MIN_MULTIPLIER, MIN_THICKNESS_M};
