//! Heuristic numeric coercion of mostly-numeric text columns.

use polars::prelude::*;

use orbis_common::{parse_f64, parse_i64};
use orbis_model::ColumnKind;

use crate::error::Result;
use crate::options::CleanOptions;

/// Converts text and mixed columns whose non-null values mostly parse as
/// numbers.
///
/// The ratio counts only non-null values. Columns at or above the threshold
/// become `Int64` when every parsed value is an integer literal and `Float64`
/// otherwise; values that fail to parse become null. Columns with no non-null
/// values are left alone.
pub fn coerce_numeric_columns(df: &DataFrame, options: &CleanOptions) -> Result<DataFrame> {
    options.validate()?;

    let mut columns = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        let coerced = if ColumnKind::of(column.dtype()).is_textual() {
            coerce_column(column, options.numeric_threshold)?
        } else {
            None
        };
        columns.push(coerced.unwrap_or_else(|| column.clone()));
    }
    Ok(DataFrame::new(columns)?)
}

fn coerce_column(column: &Column, threshold: f64) -> Result<Option<Column>> {
    let text = column.cast(&DataType::String)?;
    let values = text.str()?;

    let mut non_null = 0usize;
    let mut parsed = Vec::with_capacity(values.len());
    for value in values {
        match value {
            Some(raw) => {
                non_null += 1;
                parsed.push(parse_f64(raw).map(|number| (raw, number)));
            }
            None => parsed.push(None),
        }
    }
    if non_null == 0 {
        return Ok(None);
    }

    let parseable = parsed.iter().filter(|value| value.is_some()).count();
    let ratio = parseable as f64 / non_null as f64;
    if ratio < threshold {
        return Ok(None);
    }

    let name = column.name().clone();
    let integers: Option<Vec<Option<i64>>> = parsed
        .iter()
        .map(|value| match value {
            Some((raw, _)) => parse_i64(raw).map(Some),
            None => Some(None),
        })
        .collect();

    let series = match integers {
        Some(integers) => Series::new(name, integers),
        None => {
            let floats: Vec<Option<f64>> = parsed
                .iter()
                .map(|value| value.map(|(_, number)| number))
                .collect();
            Series::new(name, floats)
        }
    };
    Ok(Some(series.into_column()))
}
