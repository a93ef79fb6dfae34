//! Walk command: Keyword audit of a tree and its nested archives

use std::path::Path;

use anyhow::{Context, Result};
use keyscan_core::{ArchiveWalker, WalkSummary};

/// Run the walk command against `root`, rewriting its report
///
/// # Errors
/// Returns an error if the tree cannot be walked or the report written.
pub fn run(root: &Path) -> Result<WalkSummary> {
    let walker = ArchiveWalker::new(root);
    let summary = walker
        .run()
        .with_context(|| format!("walk of {} failed", root.display()))?;

    println!("max depth: {}", summary.max_depth);
    println!("rows written: {}", summary.entries.len());
    Ok(summary)
}
