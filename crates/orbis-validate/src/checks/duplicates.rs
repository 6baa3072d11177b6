use polars::prelude::DataFrame;

use orbis_common::round_ratio;
use orbis_model::{Issue, IssueType};
use orbis_transform::count_duplicate_rows;

/// Rows repeating an earlier row; reported even after de-duplication.
pub fn check(df: &DataFrame) -> Option<Issue> {
    let duplicates = count_duplicate_rows(df);
    (duplicates > 0).then(|| {
        Issue::new(
            IssueType::DuplicateRows,
            "",
            duplicates as u64,
            round_ratio(duplicates, df.height()),
            "Exact duplicate rows detected",
        )
    })
}
