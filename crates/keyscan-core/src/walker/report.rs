//! Full-overwrite walk report

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::WalkEntry;
use crate::error::{Result, ScanError};

/// Header row of the walk report
pub const WALK_REPORT_HEADER: [&str; 5] =
    ["path", "name_matches", "content_matches", "mismatch", "sha256"];

/// Keyword lists joined with `;`, as stored in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkRecord {
    pub path: String,
    pub name_matches: String,
    pub content_matches: String,
    pub mismatch: String,
    pub sha256: String,
}

impl From<&WalkEntry> for WalkRecord {
    fn from(entry: &WalkEntry) -> Self {
        Self {
            path: entry.path.clone(),
            name_matches: entry.name_matches.join(";"),
            content_matches: entry.content_matches.join(";"),
            mismatch: entry.mismatch.join(";"),
            sha256: entry.sha256.clone(),
        }
    }
}

/// Replace the report at `path` with `entries`
///
/// # Errors
/// Returns an error if the report cannot be created or written.
pub fn write_walk_report(path: &Path, entries: &[WalkEntry]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| ScanError::csv(path, e))?;
    writer
        .write_record(WALK_REPORT_HEADER)
        .map_err(|e| ScanError::csv(path, e))?;
    for entry in entries {
        writer
            .serialize(WalkRecord::from(entry))
            .map_err(|e| ScanError::csv(path, e))?;
    }
    writer.flush().map_err(|e| ScanError::io(path, e))?;
    Ok(())
}

/// Read a walk report back
///
/// # Errors
/// Returns an error if the report is unreadable or malformed.
pub fn read_walk_report(path: &Path) -> Result<Vec<WalkRecord>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| ScanError::csv(path, e))?;
    reader
        .deserialize()
        .map(|row| row.map_err(|e| ScanError::csv(path, e)))
        .collect()
}
