use polars::prelude::DataFrame;

use orbis_common::round_ratio;
use orbis_model::{Issue, IssueType};

pub fn check(df: &DataFrame) -> Vec<Issue> {
    let rows = df.height();
    df.get_columns()
        .iter()
        .filter(|column| column.null_count() > 0)
        .map(|column| {
            let nulls = column.null_count();
            Issue::new(
                IssueType::MissingValues,
                column.name().as_str(),
                nulls as u64,
                round_ratio(nulls, rows),
                "Column contains missing values",
            )
        })
        .collect()
}
