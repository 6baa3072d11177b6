//! Analytical store export.

use polars::prelude::*;
use tracing::info;

use crate::error::{Result, StoreError};

/// Table holding the cleaned rows of the latest run.
pub const CLEANED_TABLE: &str = "orbis_cleaned";
/// Table holding the validation issues of the latest run.
pub const ISSUES_TABLE: &str = "orbis_validation_issues";
/// Column tagging exported rows with their run.
pub const RUN_ID_COLUMN: &str = "run_id";

/// A local store that tables can be bulk-loaded into.
///
/// Whether a pipeline has a store is decided when the pipeline is built.
pub trait AnalyticalStore {
    /// Short description for logs.
    fn name(&self) -> &str;

    /// Replaces `table` with the contents of `df` and returns the stored row
    /// count.
    fn replace_table(
        &mut self,
        table: &str,
        df: &DataFrame,
    ) -> std::result::Result<u64, StoreError>;
}

/// Rows loaded into the store by [`export_run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCounts {
    pub cleaned: u64,
    pub issues: u64,
}

/// Copy of `df` with a constant `run_id` column appended.
pub fn with_run_id(df: &DataFrame, run_id: &str) -> Result<DataFrame> {
    let mut tagged = df.clone();
    let run_ids = Series::new(RUN_ID_COLUMN.into(), vec![run_id; df.height()]);
    tagged.with_column(run_ids)?;
    Ok(tagged)
}

/// Loads the cleaned table and the issues table, each tagged with `run_id`.
pub fn export_run(
    store: &mut dyn AnalyticalStore,
    cleaned: &DataFrame,
    issues: &DataFrame,
    run_id: &str,
) -> Result<StoreCounts> {
    info!(store = store.name(), "exporting to analytical store");

    let cleaned = store.replace_table(CLEANED_TABLE, &with_run_id(cleaned, run_id)?)?;
    let issues = store.replace_table(ISSUES_TABLE, &with_run_id(issues, run_id)?)?;

    info!(
        store = store.name(),
        cleaned_rows = cleaned,
        issue_rows = issues,
        "analytical store export complete"
    );
    Ok(StoreCounts { cleaned, issues })
}
