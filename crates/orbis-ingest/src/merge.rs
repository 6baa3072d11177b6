//! Vertical concatenation of tagged source tables.

use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::csv::read_and_tag;
use crate::discovery::list_source_files;
use crate::error::Result;

/// Reads and tags every eligible file in `dir`, then concatenates them.
///
/// Returns an empty frame when the directory has no eligible files.
pub fn merge(dir: &Path) -> Result<DataFrame> {
    let files = list_source_files(dir)?;
    debug!(dir = %dir.display(), files = files.len(), "discovered source files");

    let mut frames = Vec::with_capacity(files.len());
    for path in &files {
        let df = read_and_tag(path)?;
        debug!(
            file = %path.display(),
            rows = df.height(),
            columns = df.width(),
            "read source file"
        );
        frames.push(df);
    }

    merge_frames(frames)
}

/// Concatenates frames vertically, unioning columns by name.
///
/// Column order follows first appearance across frames. A column missing from
/// a frame is null for that frame's rows.
pub fn merge_frames(frames: Vec<DataFrame>) -> Result<DataFrame> {
    let mut order: Vec<String> = Vec::new();
    for df in &frames {
        for name in df.get_column_names() {
            if !order.iter().any(|existing| existing == name.as_str()) {
                order.push(name.to_string());
            }
        }
    }

    let mut merged: Option<DataFrame> = None;
    for df in frames {
        let aligned = align_columns(df, &order)?;
        match merged.as_mut() {
            Some(acc) => {
                acc.vstack_mut(&aligned)?;
            }
            None => merged = Some(aligned),
        }
    }

    Ok(merged.unwrap_or_default())
}

fn align_columns(mut df: DataFrame, order: &[String]) -> Result<DataFrame> {
    let height = df.height();
    for name in order {
        if df.column(name).is_err() {
            let filler = Series::full_null(name.as_str().into(), height, &DataType::String);
            df.with_column(filler)?;
        }
    }
    Ok(df.select(order.iter().map(String::as_str))?)
}
