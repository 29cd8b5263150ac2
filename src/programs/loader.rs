//! Loading requirement tables from disk.

use std::path::Path;

use super::schema::RequirementTables;
use crate::catalog::loader::read_data_file;
use crate::error::Result;

/// Load requirement tables from a JSON or YAML file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist and
/// `ConfigParseError` if it cannot be parsed.
pub fn load_requirements(path: &Path) -> Result<RequirementTables> {
    let tables: RequirementTables = read_data_file(path)?;
    tracing::debug!(
        "Loaded {} programs and {} colleges from {}",
        tables.programs.len(),
        tables.colleges.len(),
        path.display()
    );
    Ok(tables)
}
