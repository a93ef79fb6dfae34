//! Archive walker: keyword audit of a directory tree and nested zips
//!
//! Every regular file under the root is read, matched against the keywords
//! by name and by content, and hashed. Files whose name ends in `.zip` and
//! that open as archives are also descended into, member by member, including
//! zips nested inside zips. Members are addressed as `outer.zip!inner/path`.

mod archive;
mod entry;
mod report;

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{Result, ScanError};
use crate::keywords::KeywordSet;

pub use entry::WalkEntry;
pub use report::{read_walk_report, write_walk_report, WalkRecord, WALK_REPORT_HEADER};

/// Default report file name, written into the walked root
pub const DEFAULT_WALK_REPORT: &str = "walk_report.csv";

/// Default limit on how many archive levels are opened
pub const DEFAULT_MAX_NESTING: usize = 16;

/// Accumulated output of one walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Entries in visit order
    pub entries: Vec<WalkEntry>,
    /// Deepest unit seen, in path segments from the root
    pub max_depth: usize,
}

impl WalkSummary {
    fn record(&mut self, entry: WalkEntry) {
        self.max_depth = self.max_depth.max(entry.depth);
        self.entries.push(entry);
    }

    /// Look up an entry by its display path
    #[must_use]
    pub fn entry(&self, path: &str) -> Option<&WalkEntry> {
        self.entries.iter().find(|e| e.path == path)
    }
}

/// Walker over a root directory and the archives inside it
#[derive(Debug)]
pub struct ArchiveWalker {
    root: PathBuf,
    report_name: String,
    ignore: BTreeSet<String>,
    keywords: KeywordSet,
    max_nesting: usize,
}

impl ArchiveWalker {
    /// Create a walker with the fixed keywords and the default report name
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            report_name: DEFAULT_WALK_REPORT.to_string(),
            ignore: BTreeSet::from([DEFAULT_WALK_REPORT.to_string()]),
            keywords: KeywordSet::walk_defaults(),
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }

    /// Write the report under a different file name; that name is ignored
    /// instead of the previous one
    #[must_use]
    pub fn with_report_name(mut self, name: impl Into<String>) -> Self {
        self.ignore.remove(&self.report_name);
        self.report_name = name.into();
        self.ignore.insert(self.report_name.clone());
        self
    }

    /// Skip additional file names anywhere in the directory tree
    ///
    /// Names are matched against a file's base name. Archive members are not
    /// filtered.
    #[must_use]
    pub fn with_ignore<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_keywords(mut self, keywords: KeywordSet) -> Self {
        self.keywords = keywords;
        self
    }

    /// Limit how many archive levels are opened
    ///
    /// A zip beyond the limit is still reported as a unit but not descended
    /// into. `0` disables archive descent entirely.
    #[must_use]
    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }

    /// Where [`ArchiveWalker::run`] writes its report
    #[must_use]
    pub fn report_path(&self) -> PathBuf {
        self.root.join(&self.report_name)
    }

    /// Walk the tree and overwrite the report with the result
    ///
    /// # Errors
    /// Returns an error if walking fails or the report cannot be written.
    pub fn run(&self) -> Result<WalkSummary> {
        let summary = self.walk()?;
        let report_path = self.report_path();
        write_walk_report(&report_path, &summary.entries)?;
        info!(
            "Wrote {} rows to {} (max depth {})",
            summary.entries.len(),
            report_path.display(),
            summary.max_depth
        );
        Ok(summary)
    }

    /// Walk the tree and collect one entry per file and archive member
    ///
    /// # Errors
    /// Returns an error if a directory cannot be listed, a file cannot be
    /// read, or a member of an opened archive cannot be extracted.
    pub fn walk(&self) -> Result<WalkSummary> {
        info!("Walking {}", self.root.display());
        let mut summary = WalkSummary::default();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry?;
            if entry.path_is_symlink() {
                debug!("Skipping symlink {}", entry.path().display());
                continue;
            }
            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if self.ignore.contains(name.as_ref()) {
                debug!("Skipping ignored file {}", entry.path().display());
                continue;
            }

            let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
            let display_path = display_relative(relative);
            let bytes = fs::read(entry.path()).map_err(|e| ScanError::io(entry.path(), e))?;

            self.visit_unit(&bytes, &display_path, &name, entry.depth(), 0, &mut summary)?;
        }

        info!(
            "Walk complete: {} units, max depth {}",
            summary.entries.len(),
            summary.max_depth
        );
        Ok(summary)
    }

    /// Record one unit, then descend into it if it is a readable zip
    ///
    /// `nesting` counts the archives already opened above this unit.
    fn visit_unit(
        &self,
        bytes: &[u8],
        display_path: &str,
        base_name: &str,
        depth: usize,
        nesting: usize,
        summary: &mut WalkSummary,
    ) -> Result<()> {
        let entry = WalkEntry::from_unit(display_path, base_name, bytes, depth, &self.keywords);
        debug!(
            "{} depth={} mismatch={:?}",
            entry.path, entry.depth, entry.mismatch
        );
        summary.record(entry);

        if !archive::has_zip_extension(base_name) {
            return Ok(());
        }
        let Some(mut zip) = archive::open(bytes) else {
            debug!("{} is not a readable zip, treating as a plain file", display_path);
            return Ok(());
        };
        if nesting >= self.max_nesting {
            warn!(
                "Not descending into {}: archive nesting limit {} reached",
                display_path, self.max_nesting
            );
            return Ok(());
        }

        for index in 0..zip.len() {
            let Some(member) = archive::read_member(&mut zip, index, display_path)? else {
                continue;
            };
            let member_path = format!("{}!{}", display_path, member.name);
            let member_depth = depth + archive::segment_count(&member.name);
            self.visit_unit(
                &member.bytes,
                &member_path,
                archive::base_name(&member.name),
                member_depth,
                nesting + 1,
                summary,
            )?;
        }
        Ok(())
    }
}

/// Render a root-relative path with `/` separators
fn display_relative(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests;
