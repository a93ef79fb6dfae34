//! keyscan-core: Keyword auditing of digest tables and nested archives
//!
//! Two independent pipelines share the same shape: enumerate items, classify
//! them by case-insensitive keyword containment, and emit fixed-shape rows
//! into a CSV report.
//!
//! # Pipelines
//!
//! - **Digest scanner** - reads `PR<n>_THREAD_DIGEST.md` tables and appends
//!   keyword hits to a deduplicated, cumulative report
//! - **Archive walker** - walks a directory tree and every zip nested inside
//!   it, comparing name matches with content matches and hashing each unit

pub mod digest;
pub mod error;
pub mod hash;
pub mod keywords;
pub mod walker;

// Re-export commonly used types
pub use digest::{DigestRow, DigestScanSummary, DigestScanner, KeywordMatch};
pub use error::{Result, ScanError};
pub use hash::compute_hash;
pub use keywords::KeywordSet;
pub use walker::{ArchiveWalker, WalkEntry, WalkSummary};
