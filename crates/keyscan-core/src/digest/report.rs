//! Cumulative, append-only match report

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing::debug;

use super::KeywordMatch;
use crate::error::{Result, ScanError};

/// Header row of the match report
pub const REPORT_HEADER: [&str; 4] = ["thread_id", "digest_path", "title", "keyword"];

/// The match report on disk
#[derive(Debug, Clone)]
pub struct MatchReport {
    path: PathBuf,
}

impl MatchReport {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A report that is absent or zero bytes long still needs its header
    fn needs_header(&self) -> bool {
        fs::metadata(&self.path).map_or(true, |meta| meta.len() == 0)
    }

    /// Keys `(thread_id, digest_path)` of every row already in the report
    ///
    /// # Errors
    /// Returns an error if the report exists but is unreadable, is not valid
    /// CSV, or lacks a `thread_id` or `digest_path` column.
    pub fn load_seen(&self) -> Result<HashSet<(String, String)>> {
        let mut seen = HashSet::new();
        if self.needs_header() {
            return Ok(seen);
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| ScanError::csv(&self.path, e))?;
        let headers = reader
            .headers()
            .map_err(|e| ScanError::csv(&self.path, e))?
            .clone();
        let column = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| ScanError::MalformedReport {
                    path: self.path.clone(),
                    column: name,
                })
        };
        let thread_col = column("thread_id")?;
        let path_col = column("digest_path")?;

        for record in reader.records() {
            let record = record.map_err(|e| ScanError::csv(&self.path, e))?;
            let thread_id = record.get(thread_col).unwrap_or_default();
            let digest_path = record.get(path_col).unwrap_or_default();
            seen.insert((thread_id.to_string(), digest_path.to_string()));
        }
        debug!("{} rows already in {}", seen.len(), self.path.display());
        Ok(seen)
    }

    /// Append rows, writing the header first if the report is new
    ///
    /// The report is created even when `rows` is empty.
    ///
    /// # Errors
    /// Returns an error if the report cannot be opened or written.
    pub fn append(&self, rows: &[KeywordMatch]) -> Result<()> {
        let write_header = self.needs_header();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ScanError::io(&self.path, e))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if write_header {
            writer
                .write_record(REPORT_HEADER)
                .map_err(|e| ScanError::csv(&self.path, e))?;
        }
        for row in rows {
            writer
                .serialize(row)
                .map_err(|e| ScanError::csv(&self.path, e))?;
        }
        writer.flush().map_err(|e| ScanError::io(&self.path, e))?;
        Ok(())
    }

    /// Read every row of the report
    ///
    /// # Errors
    /// Returns an error if the report is unreadable or a row does not match
    /// the report header.
    pub fn read_all(&self) -> Result<Vec<KeywordMatch>> {
        let mut reader =
            csv::Reader::from_path(&self.path).map_err(|e| ScanError::csv(&self.path, e))?;
        reader
            .deserialize()
            .map(|row| row.map_err(|e| ScanError::csv(&self.path, e)))
            .collect()
    }
}
