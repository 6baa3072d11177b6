//! Error types for FAF5 ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering or reading source files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source directory does not exist or is not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The csv reader rejected the file.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV file has no header record.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// A record has more fields than the header.
    #[error("malformed record at line {line} of {path}: expected {expected} fields, found {found}")]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl IngestError {
    /// Whether this error belongs to the CSV parse family.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::CsvParse { .. } | Self::EmptyCsv { .. } | Self::MalformedRecord { .. }
        )
    }
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
