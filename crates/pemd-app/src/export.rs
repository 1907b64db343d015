//! Report export to disk

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use pemd_infra::report_file_name;
use pemd_types::Result;
use tracing::info;

use crate::session::EstimateSession;

/// Local wall-clock time used for the report header and file name
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Write the session report to `path`
pub fn export_to_file(
    session: &EstimateSession,
    path: &Path,
    generated_at: NaiveDateTime,
) -> Result<()> {
    let content = session.export_report(generated_at)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    info!(rows = session.estimates().len(), path = %path.display(), "report exported");
    Ok(())
}

/// Write the session report as `diagnostic-pemd-<YYYY-MM-DD>.csv` inside `dir`
pub fn export_to_dir(
    session: &EstimateSession,
    dir: &Path,
    generated_at: NaiveDateTime,
) -> Result<PathBuf> {
    let path = dir.join(report_file_name(generated_at.date()));
    export_to_file(session, &path, generated_at)?;
    Ok(path)
}
