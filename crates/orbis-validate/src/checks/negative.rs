//! Negative values in numeric columns.

use polars::prelude::{AnyValue, DataFrame};

use orbis_common::{any_to_f64, round_ratio};
use orbis_model::{ColumnKind, Issue, IssueType};

const MAX_SAMPLE_ROWS: usize = 10;

/// One issue per numeric column holding at least one negative value.
///
/// Details list up to ten zero-based row positions.
pub fn check(df: &DataFrame) -> Vec<Issue> {
    let rows = df.height();
    let mut issues = Vec::new();

    for column in df.get_columns() {
        if !ColumnKind::of(column.dtype()).is_numeric() {
            continue;
        }

        let mut count = 0usize;
        let mut samples = Vec::new();
        for idx in 0..rows {
            let negative = any_to_f64(column.get(idx).unwrap_or(AnyValue::Null))
                .is_some_and(|value| value < 0.0);
            if negative {
                count += 1;
                if samples.len() < MAX_SAMPLE_ROWS {
                    samples.push(idx);
                }
            }
        }

        if count > 0 {
            issues.push(Issue::new(
                IssueType::NegativeValues,
                column.name().as_str(),
                count as u64,
                round_ratio(count, rows),
                format!("Sample row indices: {samples:?}"),
            ));
        }
    }

    issues
}
