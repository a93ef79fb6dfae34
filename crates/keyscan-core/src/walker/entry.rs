//! One scanned unit: a file on disk or a member of an archive

use crate::hash::compute_hash;
use crate::keywords::{symmetric_difference, KeywordSet};

/// Result row for a single file or archive member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// Path relative to the root, with `!` separating archive levels
    pub path: String,
    /// Keywords in the lowercased base name, in keyword order
    pub name_matches: Vec<String>,
    /// Keywords in the lowercased decoded content, in keyword order
    pub content_matches: Vec<String>,
    /// Keywords found in exactly one of name and content, sorted
    pub mismatch: Vec<String>,
    /// Hex SHA-256 of the raw bytes
    pub sha256: String,
    /// Path segments between the root and this unit
    pub depth: usize,
}

impl WalkEntry {
    /// Classify one unit by its base name and raw content
    ///
    /// Content is decoded lossily, so undecodable bytes never fail a unit.
    #[must_use]
    pub fn from_unit(
        path: impl Into<String>,
        base_name: &str,
        bytes: &[u8],
        depth: usize,
        keywords: &KeywordSet,
    ) -> Self {
        let name_matches = keywords.matches_in(&base_name.to_lowercase());
        let content = String::from_utf8_lossy(bytes).to_lowercase();
        let content_matches = keywords.matches_in(&content);
        let mismatch = symmetric_difference(&name_matches, &content_matches);

        Self {
            path: path.into(),
            name_matches,
            content_matches,
            mismatch,
            sha256: compute_hash(bytes),
            depth,
        }
    }

    #[must_use]
    pub fn has_mismatch(&self) -> bool {
        !self.mismatch.is_empty()
    }
}
