//! Digest discovery and table row parsing

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;
use walkdir::WalkDir;

use super::{DigestRow, KeywordMatch};
use crate::error::{Result, ScanError};
use crate::keywords::KeywordSet;

// Titles stop at the first `|`, so a literal pipe inside a title truncates it.
#[allow(clippy::expect_used)]
static ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\|\s*(TH\d+)\s*\|\s*([^|]+?)\s*\|").expect("valid regex")
});

#[allow(clippy::expect_used)]
static DIGEST_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^PR\d+_THREAD_DIGEST\.md$").expect("valid regex")
});

/// Parse one digest line into a row, if it is a thread table row
#[must_use]
pub fn parse_row(line: &str) -> Option<DigestRow> {
    let caps = ROW_RE.captures(line)?;
    Some(DigestRow {
        thread_id: caps[1].to_string(),
        title: caps[2].trim().to_string(),
    })
}

/// Whether `name` has the `PR<n>_THREAD_DIGEST.md` shape
#[must_use]
pub fn is_digest_file_name(name: &str) -> bool {
    DIGEST_NAME_RE.is_match(name)
}

/// List digest files directly under `dir`, sorted by path
///
/// A directory that does not exist holds no digests.
///
/// # Errors
/// Returns an error if the directory exists but cannot be listed.
pub fn find_digest_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        warn!("Digest directory {} not found", dir.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry.file_name().to_str().is_some_and(is_digest_file_name)
        {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Render a digest path as it is keyed in the report
///
/// `.` components are dropped, so `./ARCHIVAL_STACK` and `ARCHIVAL_STACK`
/// record the same `digest_path`.
#[must_use]
pub fn report_path_of(path: &Path) -> String {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect::<PathBuf>()
        .display()
        .to_string()
}

/// Collect keyword hits from one digest file
///
/// # Errors
/// Returns an error if the file is missing, unreadable, or not UTF-8.
pub fn scan_digest_file(path: &Path, keywords: &KeywordSet) -> Result<Vec<KeywordMatch>> {
    let text = fs::read_to_string(path).map_err(|e| ScanError::io(path, e))?;
    let digest_path = report_path_of(path);

    Ok(text
        .lines()
        .filter_map(parse_row)
        .filter_map(|row| {
            let keyword = keywords.first_match(&row.title)?.to_string();
            Some(KeywordMatch {
                thread_id: row.thread_id,
                digest_path: digest_path.clone(),
                title: row.title,
                keyword,
            })
        })
        .collect())
}
