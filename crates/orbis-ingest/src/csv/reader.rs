use std::path::Path;

use csv::ReaderBuilder;
use polars::prelude::*;

use orbis_model::SOURCE_FILE_COLUMN;

use super::header::unique_headers;
use crate::error::{IngestError, Result};

/// Field values read as null. Matching is exact and case-sensitive.
pub const NULL_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a raw field is one of the [`NULL_TOKENS`].
pub fn is_null_token(field: &str) -> bool {
    NULL_TOKENS.contains(&field)
}

/// Reads one CSV file into an all-text DataFrame.
///
/// Empty fields and [`NULL_TOKENS`] become null. Short records are padded
/// with nulls; long records are rejected.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    let parse_err = |source: csv::Error| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(parse_err)?;

    let mut records = reader.records();
    let header_record = loop {
        match records.next() {
            Some(record) => {
                let record = record.map_err(parse_err)?;
                if !is_blank(&record) {
                    break record;
                }
            }
            None => {
                return Err(IngestError::EmptyCsv {
                    path: path.to_path_buf(),
                });
            }
        }
    };

    let headers = unique_headers(header_record.iter());
    let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];

    for record in records {
        let record = record.map_err(parse_err)?;
        if is_blank(&record) {
            continue;
        }
        if record.len() > headers.len() {
            return Err(IngestError::MalformedRecord {
                path: path.to_path_buf(),
                line: record.position().map_or(0, csv::Position::line),
                expected: headers.len(),
                found: record.len(),
            });
        }
        for (idx, values) in columns.iter_mut().enumerate() {
            let value = record
                .get(idx)
                .filter(|field| !is_null_token(field))
                .map(str::to_string);
            values.push(value);
        }
    }

    let columns: Vec<Column> = headers
        .iter()
        .zip(columns)
        .map(|(name, values)| Series::new(name.as_str().into(), values).into_column())
        .collect();

    Ok(DataFrame::new(columns)?)
}

/// Reads one CSV file and tags every row with the file's base name.
///
/// An existing `source_file` column is replaced.
pub fn read_and_tag(path: &Path) -> Result<DataFrame> {
    let mut df = read_csv_frame(path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let tag = Series::new(
        SOURCE_FILE_COLUMN.into(),
        vec![file_name.as_str(); df.height()],
    );
    df.with_column(tag)?;
    Ok(df)
}

fn is_blank(record: &csv::StringRecord) -> bool {
    record.len() == 1 && record.get(0).is_some_and(|field| field.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).expect("write csv");
        path
    }

    fn text(df: &DataFrame, column: &str, idx: usize) -> Option<String> {
        let value = df
            .column(column)
            .expect("column")
            .get(idx)
            .unwrap_or(AnyValue::Null);
        orbis_common::cell_text(value)
    }

    #[test]
    fn empty_fields_are_null_and_short_rows_padded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(dir.path(), "a.csv", "id,qty,note\n1,,x\n2,5\n");

        let df = read_csv_frame(&path).expect("read");
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);
        assert_eq!(text(&df, "qty", 0), None);
        assert_eq!(text(&df, "note", 1), None);
        assert_eq!(text(&df, "qty", 1).as_deref(), Some("5"));
        assert_eq!(df.column("id").expect("id").dtype(), &DataType::String);
    }

    #[test]
    fn missing_value_tokens_are_null() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(
            dir.path(),
            "a.csv",
            "tons,region\n1,east\nNA,west\n2,N/A\nNULL,#N/A\nnan,None\n",
        );

        let df = read_csv_frame(&path).expect("read");
        assert_eq!(df.height(), 5);
        assert_eq!(df.column("tons").expect("tons").null_count(), 3);
        assert_eq!(df.column("region").expect("region").null_count(), 3);
        assert_eq!(text(&df, "tons", 0).as_deref(), Some("1"));
    }

    #[test]
    fn null_tokens_match_exactly() {
        assert!(is_null_token("NA"));
        assert!(is_null_token("null"));
        assert!(is_null_token("-NaN"));
        assert!(!is_null_token(" NA"));
        assert!(!is_null_token("Na"));
        assert!(!is_null_token("none"));
    }

    #[test]
    fn values_are_kept_verbatim() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(dir.path(), "a.csv", "name\n\"  padded  \"\n");

        let df = read_csv_frame(&path).expect("read");
        assert_eq!(text(&df, "name", 0).as_deref(), Some("  padded  "));
    }

    #[test]
    fn long_record_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(dir.path(), "bad.csv", "a,b\n1,2\n1,2,3\n");

        let err = read_csv_frame(&path).expect_err("too many fields");
        assert!(matches!(
            err,
            IngestError::MalformedRecord {
                expected: 2,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn empty_file_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(dir.path(), "empty.csv", "");

        let err = read_csv_frame(&path).expect_err("no header");
        assert!(matches!(err, IngestError::EmptyCsv { .. }));
        assert!(err.is_parse_error());
    }

    #[test]
    fn header_only_file_has_no_rows() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(dir.path(), "h.csv", "a,b\n");

        let df = read_and_tag(&path).expect("read");
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 3);
    }

    #[test]
    fn tag_overwrites_existing_source_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(dir.path(), "east.csv", "source_file,v\nother.csv,1\n");

        let df = read_and_tag(&path).expect("read");
        assert_eq!(df.width(), 2);
        assert_eq!(text(&df, SOURCE_FILE_COLUMN, 0).as_deref(), Some("east.csv"));
    }
}
