use polars::prelude::*;
use tracing::debug;

use orbis_model::ColumnKind;

use crate::coerce::coerce_numeric_columns;
use crate::dedupe::remove_duplicate_rows;
use crate::error::Result;
use crate::names::normalize_column_names;
use crate::options::CleanOptions;
use crate::prune::drop_empty_columns;
use crate::standardize::standardize_text;

/// Runs the five cleaning steps in order.
pub fn clean_frame(df: &DataFrame, options: &CleanOptions) -> Result<DataFrame> {
    options.validate()?;

    let renamed = normalize_column_names(df)?;
    let renamed_count = df
        .get_column_names_str()
        .into_iter()
        .zip(renamed.get_column_names_str())
        .filter(|(before, after)| before != after)
        .count();

    let standardized = standardize_text(&renamed)?;
    let coerced = coerce_numeric_columns(&standardized, options)?;
    let coerced_count = standardized
        .get_columns()
        .iter()
        .zip(coerced.get_columns())
        .filter(|(before, after)| {
            !ColumnKind::of(before.dtype()).is_numeric()
                && ColumnKind::of(after.dtype()).is_numeric()
        })
        .count();

    let pruned = drop_empty_columns(&coerced)?;
    let deduped = remove_duplicate_rows(&pruned)?;

    debug!(
        renamed = renamed_count,
        coerced = coerced_count,
        dropped_columns = coerced.width() - pruned.width(),
        removed_rows = pruned.height() - deduped.height(),
        "cleaned frame"
    );

    Ok(deduped)
}
