use polars::prelude::*;

use crate::error::Result;

/// Removes columns whose every value is null, keeping the order of the rest.
pub fn drop_empty_columns(df: &DataFrame) -> Result<DataFrame> {
    let columns: Vec<Column> = df
        .get_columns()
        .iter()
        .filter(|column| column.null_count() < column.len())
        .cloned()
        .collect();
    Ok(DataFrame::new(columns)?)
}
