//! Output generation for the orbis pipeline.
//!
//! Writes the four reserved CSV outputs into the source directory and loads
//! run-tagged tables into an optional analytical store.

pub mod csv_writer;
pub mod error;
pub mod store;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use csv_writer::{write_cleaned, write_frame_csv, write_issues, write_merged, write_profile};
pub use error::{OutputError, Result, StoreError};
pub use store::{
    AnalyticalStore, CLEANED_TABLE, ISSUES_TABLE, RUN_ID_COLUMN, StoreCounts, export_run,
    with_run_id,
};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
