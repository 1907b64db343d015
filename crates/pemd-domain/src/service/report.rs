//! Tabular mass report built from the ledger
//!
//! Values are formatted here so every writer (CSV file, terminal) shows the
//! same digits.

use serde::Serialize;

use super::ledger::Aggregates;
use crate::model::Estimate;

pub const REPORT_TITLE: &str = "Diagnostic PEMD - Estimation des masses";

pub const REPORT_HEADERS: [&str; 9] = [
    "N°",
    "Matériau",
    "Masse volumique (kg/m³)",
    "Volume (m³)",
    "Masse (kg)",
    "Pourcentage (%)",
    "Facteur",
    "Mode de saisie",
    "Dimensions (L×l×h)",
];

/// One formatted report line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub index: String,
    pub material: String,
    pub density: String,
    pub volume: String,
    pub mass: String,
    pub percentage: String,
    pub multiplier: String,
    pub mode: String,
    pub dimensions: String,
}

impl ReportRow {
    pub fn to_record(&self) -> [&str; 9] {
        [
            self.index.as_str(),
            self.material.as_str(),
            self.density.as_str(),
            self.volume.as_str(),
            self.mass.as_str(),
            self.percentage.as_str(),
            self.multiplier.as_str(),
            self.mode.as_str(),
            self.dimensions.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub total: ReportRow,
}

impl Report {
    /// Data rows followed by the TOTAL row
    pub fn records(&self) -> impl Iterator<Item = [&str; 9]> {
        self.rows
            .iter()
            .chain(std::iter::once(&self.total))
            .map(ReportRow::to_record)
    }
}

/// Shortest decimal form, keeping a trailing `.0` on whole numbers (2400.0, 0.2)
pub fn plain_number(value: f64) -> String {
    format!("{:?}", value)
}

/// Build the report, or `None` when there is nothing to report
pub fn build_report(estimates: &[Estimate]) -> Option<Report> {
    if estimates.is_empty() {
        return None;
    }

    let totals = Aggregates::from_estimates(estimates);
    let rows = estimates
        .iter()
        .enumerate()
        .map(|(i, e)| ReportRow {
            index: (i + 1).to_string(),
            material: e.material_name().to_string(),
            density: plain_number(e.density()),
            volume: format!("{:.3}", e.volume()),
            mass: format!("{:.2}", e.mass()),
            percentage: format!("{:.1}", totals.mass_share_percent(e.mass())),
            multiplier: plain_number(e.multiplier()),
            mode: e.mode().report_label().to_string(),
            dimensions: match e.input().dimensions() {
                Some((l, w, h)) => format!(
                    "{}×{}×{}",
                    plain_number(l),
                    plain_number(w),
                    plain_number(h)
                ),
                None => "-".to_string(),
            },
        })
        .collect();

    let total = ReportRow {
        index: String::new(),
        material: "TOTAL".to_string(),
        density: String::new(),
        volume: format!("{:.3}", totals.total_volume),
        mass: format!("{:.2}", totals.total_mass),
        percentage: "100.0".to_string(),
        multiplier: String::new(),
        mode: String::new(),
        dimensions: String::new(),
    };

    Some(Report { rows, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Material, VolumeInput};

    fn two_rows() -> Vec<Estimate> {
        vec![
            Estimate::new(
                &Material::new("Béton", 2400.0),
                VolumeInput::Dimensions {
                    length: 2.0,
                    width: 1.0,
                    height: 0.2,
                    multiplier: 1.0,
                },
            )
            .unwrap(),
            Estimate::new(
                &Material::new("Acier", 7850.0),
                VolumeInput::DirectVolume {
                    volume: 0.05,
                    multiplier: 3.0,
                },
            )
            .unwrap(),
        ]
    }

    #[test]
    fn test_empty_gives_none() {
        assert!(build_report(&[]).is_none());
    }

    #[test]
    fn test_rows_and_total() {
        let report = build_report(&two_rows()).unwrap();
        assert_eq!(report.rows.len(), 2);

        let first = &report.rows[0];
        assert_eq!(first.index, "1");
        assert_eq!(first.material, "Béton");
        assert_eq!(first.density, "2400.0");
        assert_eq!(first.volume, "0.400");
        assert_eq!(first.mass, "960.00");
        assert_eq!(first.percentage, "44.9");
        assert_eq!(first.multiplier, "1.0");
        assert_eq!(first.mode, "Dimensions");
        assert_eq!(first.dimensions, "2.0×1.0×0.2");

        let second = &report.rows[1];
        assert_eq!(second.index, "2");
        assert_eq!(second.volume, "0.150");
        assert_eq!(second.mass, "1177.50");
        assert_eq!(second.percentage, "55.1");
        assert_eq!(second.multiplier, "3.0");
        assert_eq!(second.mode, "Volume direct");
        assert_eq!(second.dimensions, "-");

        assert_eq!(
            report.total.to_record(),
            ["", "TOTAL", "", "0.550", "2137.50", "100.0", "", "", ""]
        );
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let report = build_report(&two_rows()).unwrap();
        let sum: f64 = report
            .rows
            .iter()
            .map(|r| r.percentage.parse::<f64>().unwrap())
            .sum();
        assert!((sum - 100.0).abs() < 0.1 * report.rows.len() as f64);
    }

    #[test]
    fn test_records_end_with_total() {
        let report = build_report(&two_rows()).unwrap();
        let records: Vec<[&str; 9]> = report.records().collect();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2][1], "TOTAL");
    }

    #[test]
    fn test_non_direct_modes_reported_as_dimensions() {
        let estimates = vec![
            Estimate::new(
                &Material::new("Terre", 1600.0),
                VolumeInput::Surface {
                    surface: 10.0,
                    thickness: 0.03,
                    multiplier: 1.0,
                },
            )
            .unwrap(),
            Estimate::new(
                &Material::new("Bois", 600.0),
                VolumeInput::Unit {
                    unit_volume: 0.02,
                    multiplier: 10.0,
                },
            )
            .unwrap(),
        ];
        let report = build_report(&estimates).unwrap();
        for row in &report.rows {
            assert_eq!(row.mode, "Dimensions");
            assert_eq!(row.dimensions, "-");
        }
    }

    #[test]
    fn test_plain_number() {
        assert_eq!(plain_number(2400.0), "2400.0");
        assert_eq!(plain_number(0.2), "0.2");
        assert_eq!(plain_number(3.0), "3.0");
        assert_eq!(plain_number(1.25), "1.25");
    }
}
