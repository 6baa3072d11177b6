//! Exact duplicate row detection.

use std::collections::HashSet;

use polars::prelude::*;

use orbis_common::cell_text;

use crate::error::Result;

/// One boolean per row: `true` for the first occurrence of each distinct row.
///
/// Rows compare by the text of every cell, with null distinct from any string
/// and `-0.0` equal to `0.0`.
pub fn first_occurrence_mask(df: &DataFrame) -> Vec<bool> {
    let columns = df.get_columns();
    let mut seen: HashSet<Vec<Option<String>>> = HashSet::with_capacity(df.height());
    let mut keep = Vec::with_capacity(df.height());

    for idx in 0..df.height() {
        let key: Vec<Option<String>> = columns
            .iter()
            .map(|column| key_cell(column.get(idx).unwrap_or(AnyValue::Null)))
            .collect();
        keep.push(seen.insert(key));
    }

    keep
}

fn key_cell(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Float64(v) if v == 0.0 => cell_text(AnyValue::Float64(0.0)),
        AnyValue::Float32(v) if v == 0.0 => cell_text(AnyValue::Float32(0.0)),
        other => cell_text(other),
    }
}

/// Number of rows that repeat an earlier row.
pub fn count_duplicate_rows(df: &DataFrame) -> usize {
    first_occurrence_mask(df)
        .into_iter()
        .filter(|first| !first)
        .count()
}

/// Keeps the first occurrence of each distinct row, preserving row order.
pub fn remove_duplicate_rows(df: &DataFrame) -> Result<DataFrame> {
    if df.height() == 0 {
        return Ok(df.clone());
    }
    let keep = first_occurrence_mask(df);
    if keep.iter().all(|first| *first) {
        return Ok(df.clone());
    }
    let mask = BooleanChunked::from_slice("dedupe".into(), &keep);
    Ok(df.filter(&mask)?)
}
