//! Digest command: Append keyword hits from digest tables to the report

use std::path::Path;

use anyhow::{Context, Result};
use keyscan_core::{DigestScanSummary, DigestScanner, KeywordSet};
use tracing::{info, warn};

/// Run the digest command
///
/// # Errors
/// Returns an error if a digest cannot be read or the report is malformed.
pub fn run(digest_dir: &Path, report: &Path, keywords: &str) -> Result<DigestScanSummary> {
    let keywords = KeywordSet::parse_list(keywords);
    if keywords.is_empty() {
        warn!("Keyword list is empty, no rows can match");
    }
    info!(
        "Keywords: {}",
        keywords.iter().collect::<Vec<_>>().join(", ")
    );

    let summary = DigestScanner::new(digest_dir, report)
        .with_keywords(keywords)
        .run()
        .with_context(|| format!("digest scan of {} failed", digest_dir.display()))?;

    println!(
        "appended {} new rows to {} ({} already recorded)",
        summary.rows_appended,
        report.display(),
        summary.rows_skipped
    );
    Ok(summary)
}
