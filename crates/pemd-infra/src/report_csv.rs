//! CSV report writer
//!
//! Layout: title line, `Généré le <date>` line, blank line, header row,
//! one row per estimate, TOTAL row.

use std::io::Write;

use chrono::{NaiveDate, NaiveDateTime};
use pemd_domain::model::Estimate;
use pemd_domain::service::report::{build_report, Report, REPORT_HEADERS, REPORT_TITLE};
use pemd_types::ExportError;

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// `diagnostic-pemd-<YYYY-MM-DD>.csv`
pub fn report_file_name(date: NaiveDate) -> String {
    format!("diagnostic-pemd-{}.csv", date.format("%Y-%m-%d"))
}

/// Write a built report to any writer
pub fn write_report<W: Write>(
    report: &Report,
    generated_at: NaiveDateTime,
    mut writer: W,
) -> Result<W, ExportError> {
    writeln!(writer, "{}", REPORT_TITLE)?;
    writeln!(writer, "Généré le {}", generated_at.format(TIMESTAMP_FORMAT))?;
    writeln!(writer)?;

    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(REPORT_HEADERS)?;
    for record in report.records() {
        csv_writer.write_record(record)?;
    }
    csv_writer.flush()?;

    csv_writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

/// Render the estimates as CSV text. `ExportError::Empty` when there are none.
pub fn render_report(
    estimates: &[Estimate],
    generated_at: NaiveDateTime,
) -> Result<String, ExportError> {
    let report = build_report(estimates).ok_or(ExportError::Empty)?;
    let bytes = write_report(&report, generated_at, Vec::new())?;
    String::from_utf8(bytes)
        .map_err(|e| ExportError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
