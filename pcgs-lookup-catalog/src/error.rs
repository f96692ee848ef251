use thiserror::Error;

use crate::types::CatalogNumber;

/// Errors that can occur while loading a registry snapshot.
///
/// Loading is all-or-nothing: any of these means no registry was built.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Snapshot parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("Malformed snapshot: {0}")]
    Malformed(String),

    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Duplicate catalog number {0} in snapshot")]
    DuplicateNumber(CatalogNumber),
}

impl LoadError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}

/// Errors that can occur while writing a snapshot file.
#[derive(Debug, Error)]
pub enum SnapshotWriteError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that can occur while importing a legacy CSV export.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Line {line}: {message}")]
    InvalidRow { line: u64, message: String },

    #[error("Duplicate catalog number {number} on line {line}")]
    DuplicateNumber { number: CatalogNumber, line: u64 },
}

impl MigrationError {
    pub fn invalid_row(line: u64, msg: impl Into<String>) -> Self {
        Self::InvalidRow {
            line,
            message: msg.into(),
        }
    }
}
