//! Batch entries file
//!
//! ```toml
//! [[entries]]
//! material = "Béton"
//! mode = "dimensions"
//! length = 2.0
//! width = 1.0
//! height = 0.2
//! ```

use std::path::Path;

use pemd_app::EstimateSession;
use pemd_domain::model::{InputMode, RawFields};
use pemd_types::{ConfigError, Error, EstimateError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct BatchFile {
    #[serde(default)]
    entries: Vec<BatchEntry>,
}

#[derive(Debug, Deserialize)]
pub struct BatchEntry {
    pub material: String,
    pub mode: InputMode,
    #[serde(flatten)]
    pub fields: RawFields,
}

/// Entry that was not added, with its 1-based position in the file
#[derive(Debug)]
pub struct Rejected {
    pub position: usize,
    pub material: String,
    pub error: EstimateError,
}

pub fn load_entries(path: &Path) -> Result<Vec<BatchEntry>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_entries(&content)
}

pub fn parse_entries(content: &str) -> Result<Vec<BatchEntry>> {
    let file: BatchFile = toml::from_str(content).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to parse entries file: {}",
            e
        )))
    })?;
    Ok(file.entries)
}

/// Commit every entry in order, collecting the ones that were refused
pub fn commit_entries(session: &mut EstimateSession, entries: Vec<BatchEntry>) -> Vec<Rejected> {
    let mut rejected = Vec::new();
    for (i, entry) in entries.into_iter().enumerate() {
        let result = entry
            .fields
            .into_input(entry.mode)
            .and_then(|input| session.commit(&entry.material, input).map(|_| ()));
        if let Err(error) = result {
            rejected.push(Rejected {
                position: i + 1,
                material: entry.material,
                error,
            });
        }
    }
    rejected
}
