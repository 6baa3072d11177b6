//! Column name normalization.

use std::collections::HashSet;

use polars::prelude::*;

use crate::error::Result;

const FALLBACK_NAME: &str = "column";

/// Normalizes a column name to lowercase snake case.
///
/// Runs of non-alphanumeric characters collapse to one `_`, leading and
/// trailing `_` are dropped, and an empty result becomes `column`.
///
/// # Examples
///
/// ```
/// use orbis_transform::normalize_column_name;
///
/// assert_eq!(normalize_column_name("  Total Cost ($)  "), "total_cost");
/// assert_eq!(normalize_column_name("SKU-ID"), "sku_id");
/// assert_eq!(normalize_column_name("%%"), "column");
/// ```
pub fn normalize_column_name(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut safe = String::with_capacity(lowered.len());
    // Start as if after an underscore so leading separators are skipped
    let mut last_was_underscore = true;
    for ch in lowered.chars() {
        if ch.is_alphanumeric() {
            safe.push(ch);
            last_was_underscore = false;
        } else if !last_was_underscore {
            safe.push('_');
            last_was_underscore = true;
        }
    }

    if safe.ends_with('_') {
        safe.pop();
    }

    if safe.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        safe
    }
}

/// Normalizes every column name, suffixing collisions in column order.
///
/// The first column to claim a name keeps it; later ones get `_2`, `_3`, ...
/// skipping any candidate already taken.
pub fn normalize_column_names(df: &DataFrame) -> Result<DataFrame> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| normalize_column_name(name.as_str()))
        .collect();
    let names = resolve_collisions(names);

    let columns: Vec<Column> = df
        .get_columns()
        .iter()
        .zip(names)
        .map(|(column, name)| column.clone().with_name(name.into()))
        .collect();

    Ok(DataFrame::new(columns)?)
}

fn resolve_collisions(names: Vec<String>) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::with_capacity(names.len());
    let mut resolved = Vec::with_capacity(names.len());

    for base in names {
        let mut candidate = base.clone();
        let mut suffix = 2;
        while used.contains(&candidate) {
            candidate = format!("{base}_{suffix}");
            suffix += 1;
        }
        used.insert(candidate.clone());
        resolved.push(candidate);
    }

    resolved
}
