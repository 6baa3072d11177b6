//! Data-quality checks.
//!
//! Each module performs one kind of check and returns the issues it found.

mod duplicates;
mod missing;
mod negative;
mod source_file;

use std::path::Path;

use polars::prelude::DataFrame;

use orbis_model::Issue;

/// Run all checks in their fixed output order.
pub fn run_all(df: &DataFrame, source_dir: &Path) -> Vec<Issue> {
    let mut issues = Vec::new();

    // 1. Missing values, one issue per column with nulls
    issues.extend(missing::check(df));

    // 2. Negative values in numeric columns
    issues.extend(negative::check(df));

    // 3. source_file integrity
    issues.extend(source_file::check(df, source_dir));

    // 4. Exact duplicate rows
    issues.extend(duplicates::check(df));

    issues
}
