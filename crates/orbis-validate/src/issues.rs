//! Issue collection and the issues table.

use std::path::Path;

use polars::prelude::*;

use orbis_model::{ISSUE_COLUMNS, Issue};

use crate::checks;
use crate::error::Result;

/// Runs every check against a cleaned table.
///
/// `source_dir` is the directory the table was ingested from; its current
/// eligible files define which `source_file` values are valid.
pub fn collect_issues(df: &DataFrame, source_dir: &Path) -> Vec<Issue> {
    checks::run_all(df, source_dir)
}

/// Runs every check and renders the issues as a table.
pub fn gather_validation_issues(df: &DataFrame, source_dir: &Path) -> Result<DataFrame> {
    issues_frame(&collect_issues(df, source_dir))
}

/// Renders issues with the fixed issue columns, even when there are none.
pub fn issues_frame(issues: &[Issue]) -> Result<DataFrame> {
    let [issue_type, column, count, pct, details] = ISSUE_COLUMNS;

    let columns = vec![
        Series::new(
            issue_type.into(),
            issues
                .iter()
                .map(|issue| issue.issue_type.as_str())
                .collect::<Vec<_>>(),
        )
        .into_column(),
        Series::new(
            column.into(),
            issues
                .iter()
                .map(|issue| issue.column.as_str())
                .collect::<Vec<_>>(),
        )
        .into_column(),
        Series::new(
            count.into(),
            issues.iter().map(|issue| issue.count).collect::<Vec<_>>(),
        )
        .into_column(),
        Series::new(
            pct.into(),
            issues.iter().map(|issue| issue.pct).collect::<Vec<_>>(),
        )
        .into_column(),
        Series::new(
            details.into(),
            issues
                .iter()
                .map(|issue| issue.details.as_str())
                .collect::<Vec<_>>(),
        )
        .into_column(),
    ];

    Ok(DataFrame::new(columns)?)
}
