//! Error type shared by both scanning pipelines

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scanning or writing reports
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed report {}: missing column `{column}`", .path.display())]
    MalformedReport { path: PathBuf, column: &'static str },

    #[error("Archive error in {display_path}: {source}")]
    Archive {
        display_path: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl ScanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for scanner operations
pub type Result<T> = std::result::Result<T, ScanError>;
