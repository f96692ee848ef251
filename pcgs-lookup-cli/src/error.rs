use thiserror::Error;

use pcgs_lookup_catalog::{LoadError, MigrationError, SnapshotWriteError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Free-text input could not be parsed into a query
    #[error("{0}")]
    InvalidQueryInput(String),

    /// Registry snapshot could not be loaded
    #[error("Failed to load registry: {0}")]
    Load(#[from] LoadError),

    /// Legacy export could not be imported
    #[error("Migration failed: {0}")]
    Migration(#[from] MigrationError),

    /// Snapshot could not be written
    #[error("Failed to write snapshot: {0}")]
    SnapshotWrite(#[from] SnapshotWriteError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn invalid_query_input(msg: impl Into<String>) -> Self {
        Self::InvalidQueryInput(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
