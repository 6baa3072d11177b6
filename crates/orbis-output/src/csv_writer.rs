//! CSV output for pipeline tables.

use std::path::{Path, PathBuf};

use polars::prelude::*;

use orbis_common::cell_text;
use orbis_model::{CLEANED_FILE, MERGED_FILE, VALIDATION_COLUMNS_FILE, VALIDATION_ISSUES_FILE};

use crate::error::{OutputError, Result};

/// Writes a frame as CSV with a header row, truncating any existing file.
///
/// Nulls become empty fields; floats use the shortest round-trip form.
pub fn write_frame_csv(df: &DataFrame, path: &Path) -> Result<()> {
    let write_err = |source: csv::Error| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(write_err)?;
    writer
        .write_record(df.get_column_names_str())
        .map_err(write_err)?;

    let columns = df.get_columns();
    let mut record: Vec<String> = Vec::with_capacity(columns.len());
    for idx in 0..df.height() {
        record.clear();
        record.extend(columns.iter().map(|column| {
            cell_text(column.get(idx).unwrap_or(AnyValue::Null)).unwrap_or_default()
        }));
        writer.write_record(&record).map_err(write_err)?;
    }

    writer.flush().map_err(|source| OutputError::Flush {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn write_output(df: &DataFrame, dir: &Path, file_name: &str) -> Result<PathBuf> {
    let path = dir.join(file_name);
    write_frame_csv(df, &path)?;
    Ok(path)
}

/// Writes `FAF5_MERGED.csv`.
pub fn write_merged(df: &DataFrame, dir: &Path) -> Result<PathBuf> {
    write_output(df, dir, MERGED_FILE)
}

/// Writes `FAF5_MERGED_CLEANED.csv`.
pub fn write_cleaned(df: &DataFrame, dir: &Path) -> Result<PathBuf> {
    write_output(df, dir, CLEANED_FILE)
}

/// Writes `FAF5_VALIDATION_COLUMNS.csv`.
pub fn write_profile(df: &DataFrame, dir: &Path) -> Result<PathBuf> {
    write_output(df, dir, VALIDATION_COLUMNS_FILE)
}

/// Writes `FAF5_VALIDATION_ISSUES.csv`.
pub fn write_issues(df: &DataFrame, dir: &Path) -> Result<PathBuf> {
    write_output(df, dir, VALIDATION_ISSUES_FILE)
}
