//! Error types for output operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing outputs.
#[derive(Debug, Error)]
pub enum OutputError {
    /// CSV output could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Flushing the output file failed.
    #[error("failed to flush {path}: {source}")]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Analytical store rejected the export.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for OutputError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Errors raised by an [`AnalyticalStore`](crate::AnalyticalStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Table has no columns to create.
    #[error("cannot create table '{table}' without columns")]
    NoColumns { table: String },

    /// Read-back row count disagrees with the frame.
    #[error("table '{table}' holds {found} rows after load, expected {expected}")]
    RowCountMismatch {
        table: String,
        expected: u64,
        found: u64,
    },

    /// SQLite failure.
    #[cfg(feature = "sqlite")]
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
