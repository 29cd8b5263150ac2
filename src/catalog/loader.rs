//! Loading catalog snapshots from disk.
//!
//! Catalog files are produced by the ingestion pipeline as JSON; YAML is
//! accepted too so that small hand-written fixtures stay readable.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::course::Course;
use super::snapshot::Catalog;
use crate::error::{PlannerError, Result};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    courses: Vec<Course>,
}

/// Read a data file and deserialize it according to its extension.
///
/// `.json` files go through `serde_json`; anything else is parsed as YAML.
pub(crate) fn read_data_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PlannerError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PlannerError::Io(e)
        }
    })?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|message| PlannerError::ConfigParseError {
        path: path.to_path_buf(),
        message,
    })
}

/// Load a catalog snapshot.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist and
/// `ConfigParseError` if it cannot be parsed (including malformed codes).
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let file: CatalogFile = read_data_file(path)?;
    tracing::debug!("Loaded {} courses from {}", file.courses.len(), path.display());
    Ok(Catalog::new(file.courses))
}
