//! Integrity of the `source_file` tag column.

use std::collections::HashSet;
use std::path::Path;

use polars::prelude::{Column, DataFrame, DataType, PolarsResult};
use tracing::debug;

use orbis_common::round_ratio;
use orbis_ingest::eligible_file_names;
use orbis_model::{Issue, IssueType, SOURCE_FILE_COLUMN};

const MAX_SAMPLE_VALUES: usize = 10;

/// Checks presence, nulls, blanks and membership of `source_file` values.
///
/// Membership is checked against the eligible files currently in
/// `source_dir`. The check is skipped when the directory cannot be listed or
/// holds no eligible files.
pub fn check(df: &DataFrame, source_dir: &Path) -> Vec<Issue> {
    let rows = df.height();

    let Ok(column) = df.column(SOURCE_FILE_COLUMN) else {
        let pct = if rows > 0 { 1.0 } else { 0.0 };
        return vec![Issue::new(
            IssueType::SourceFileMissing,
            SOURCE_FILE_COLUMN,
            rows as u64,
            pct,
            format!("Column '{SOURCE_FILE_COLUMN}' not found"),
        )];
    };

    let values = match text_values(column) {
        Ok(values) => values,
        Err(err) => {
            debug!(error = %err, "source_file column is not castable to text");
            return Vec::new();
        }
    };

    let mut issues = Vec::new();

    let nulls = values.iter().filter(|value| value.is_none()).count();
    if nulls > 0 {
        issues.push(Issue::new(
            IssueType::SourceFileNull,
            SOURCE_FILE_COLUMN,
            nulls as u64,
            round_ratio(nulls, rows),
            format!("Null values present in '{SOURCE_FILE_COLUMN}'"),
        ));
    }

    let empty = values
        .iter()
        .flatten()
        .filter(|value| value.trim().is_empty())
        .count();
    if empty > 0 {
        issues.push(Issue::new(
            IssueType::SourceFileEmpty,
            SOURCE_FILE_COLUMN,
            empty as u64,
            round_ratio(empty, rows),
            format!("Empty string values present in '{SOURCE_FILE_COLUMN}'"),
        ));
    }

    match eligible_file_names(source_dir) {
        Ok(allowed) if allowed.is_empty() => {
            debug!(
                dir = %source_dir.display(),
                "no eligible source files; skipping source_file membership check"
            );
        }
        Ok(allowed) => {
            let mut invalid = 0usize;
            let mut seen = HashSet::new();
            let mut samples = Vec::new();
            for value in values.iter().flatten() {
                if allowed.contains(value) {
                    continue;
                }
                invalid += 1;
                if samples.len() < MAX_SAMPLE_VALUES && seen.insert(value.as_str()) {
                    samples.push(format!("'{value}'"));
                }
            }
            if invalid > 0 {
                issues.push(Issue::new(
                    IssueType::SourceFileInvalid,
                    SOURCE_FILE_COLUMN,
                    invalid as u64,
                    round_ratio(invalid, rows),
                    format!("Values not in source directory: [{}]", samples.join(", ")),
                ));
            }
        }
        Err(err) => {
            debug!(
                dir = %source_dir.display(),
                error = %err,
                "skipping source_file membership check"
            );
        }
    }

    issues
}

fn text_values(column: &Column) -> PolarsResult<Vec<Option<String>>> {
    let text = column.cast(&DataType::String)?;
    Ok(text
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect())
}
