//! Whitespace trimming and empty-to-null standardization.

use polars::prelude::*;

use orbis_model::ColumnKind;

use crate::error::Result;

/// Trims every value of text and mixed columns and nulls out empty results.
///
/// Mixed columns are cast to text first, so every textual column leaves this
/// step as `Text`. Numeric columns are returned unchanged.
pub fn standardize_text(df: &DataFrame) -> Result<DataFrame> {
    let mut columns = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        if ColumnKind::of(column.dtype()).is_textual() {
            columns.push(standardize_column(column)?);
        } else {
            columns.push(column.clone());
        }
    }
    Ok(DataFrame::new(columns)?)
}

fn standardize_column(column: &Column) -> Result<Column> {
    let text = column.cast(&DataType::String)?;
    let values: Vec<Option<&str>> = text
        .str()?
        .into_iter()
        .map(|value| value.map(str::trim).filter(|trimmed| !trimmed.is_empty()))
        .collect();
    Ok(Series::new(column.name().clone(), values).into_column())
}
