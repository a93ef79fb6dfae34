//! Digest scanner: keyword hits from thread digest tables
//!
//! Reads every `PR<n>_THREAD_DIGEST.md` directly under a directory, pulls the
//! `| TH<n> | title |` rows out of its table, and appends rows whose title
//! contains a keyword to a cumulative CSV report. Rows already recorded under
//! the same `(thread_id, digest_path)` key are never written twice.

mod parse;
mod report;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::keywords::KeywordSet;

pub use parse::{
    find_digest_files, is_digest_file_name, parse_row, report_path_of, scan_digest_file,
};
pub use report::{MatchReport, REPORT_HEADER};

/// Default directory holding digest files
pub const DEFAULT_DIGEST_DIR: &str = "ARCHIVAL_STACK";

/// Default cumulative report path
pub const DEFAULT_REPORT_PATH: &str = "keyword_matches.csv";

/// One `| TH<n> | title |` row of a digest table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestRow {
    pub thread_id: String,
    pub title: String,
}

/// A digest row whose title matched a keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub thread_id: String,
    pub digest_path: String,
    pub title: String,
    /// First matching keyword, lowercased
    pub keyword: String,
}

impl KeywordMatch {
    /// Deduplication key of this row
    #[must_use]
    pub fn key(&self) -> (String, String) {
        (self.thread_id.clone(), self.digest_path.clone())
    }
}

/// Counters describing one digest scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigestScanSummary {
    pub files_scanned: usize,
    pub matches_found: usize,
    pub rows_appended: usize,
    pub rows_skipped: usize,
}

/// Scanner for a directory of thread digests
#[derive(Debug)]
pub struct DigestScanner {
    digest_dir: PathBuf,
    report_path: PathBuf,
    keywords: KeywordSet,
}

impl DigestScanner {
    /// Create a scanner with the default keyword list
    #[must_use]
    pub fn new(digest_dir: impl Into<PathBuf>, report_path: impl Into<PathBuf>) -> Self {
        Self {
            digest_dir: digest_dir.into(),
            report_path: report_path.into(),
            keywords: KeywordSet::digest_defaults(),
        }
    }

    /// Replace the keyword list; order decides which keyword a title reports
    #[must_use]
    pub fn with_keywords(mut self, keywords: KeywordSet) -> Self {
        self.keywords = keywords;
        self
    }

    /// Scan every digest and append unseen matches to the report
    ///
    /// All digests are read before the report is opened, so a digest that
    /// cannot be read aborts the run with the report untouched.
    ///
    /// # Errors
    /// Returns an error if a digest cannot be read, or if the existing report
    /// cannot be parsed or written.
    pub fn run(&self) -> Result<DigestScanSummary> {
        info!("Scanning digests in {}", self.digest_dir.display());

        let files = find_digest_files(&self.digest_dir)?;
        let mut matches = Vec::new();
        for path in &files {
            let found = scan_digest_file(path, &self.keywords)?;
            debug!("{}: {} matching rows", path.display(), found.len());
            matches.extend(found);
        }

        let report = MatchReport::new(&self.report_path);
        let mut seen = report.load_seen()?;
        let matches_found = matches.len();
        let fresh: Vec<KeywordMatch> = matches
            .into_iter()
            .filter(|m| seen.insert(m.key()))
            .collect();

        report.append(&fresh)?;

        let summary = DigestScanSummary {
            files_scanned: files.len(),
            matches_found,
            rows_appended: fresh.len(),
            rows_skipped: matches_found - fresh.len(),
        };
        info!(
            "Digest scan complete: {} files, {} matches, {} appended, {} already recorded",
            summary.files_scanned,
            summary.matches_found,
            summary.rows_appended,
            summary.rows_skipped
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests;
