// BizDir - app/loader.rs
//
// One-shot data load: read the file, decode the JSON array, enrich every
// record. Any failure aborts the whole load; per-record defects never do.

use crate::core::award::AwardMatcher;
use crate::core::enrich::{enrich_all, EnrichedDirectory};
use crate::platform::fs::read_data_file;
use crate::util::error::LoadError;
use serde_json::Value;
use std::path::Path;
use std::time::Instant;

/// Decode the data file content into its raw records.
pub fn parse_records(content: &str, path: &Path) -> Result<Vec<Value>, LoadError> {
    let value: Value = serde_json::from_str(content).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    match value {
        Value::Array(records) => Ok(records),
        _ => Err(LoadError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}

/// Decode and enrich already-fetched content.
pub fn load_from_str(
    content: &str,
    path: &Path,
    awards: &AwardMatcher,
) -> Result<EnrichedDirectory, LoadError> {
    let records = parse_records(content, path)?;
    Ok(enrich_all(&records, awards))
}

/// Fetch, decode and enrich the data file at `path`.
pub fn load_directory(
    path: &Path,
    max_size: u64,
    awards: &AwardMatcher,
) -> Result<EnrichedDirectory, LoadError> {
    let started = Instant::now();
    tracing::debug!(path = %path.display(), "Loading business data");

    let content = read_data_file(path, max_size)?;
    let directory = load_from_str(&content, path, awards)?;

    tracing::info!(
        path = %path.display(),
        businesses = directory.entities.len(),
        industries = directory.industries.len(),
        locations = directory.locations.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Business data loaded"
    );

    Ok(directory)
}
