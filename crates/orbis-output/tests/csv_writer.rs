//! Tests for CSV outputs.

use std::fs;

use orbis_output::{write_cleaned, write_frame_csv, write_issues, write_merged, write_profile};
use polars::prelude::*;

fn frame() -> DataFrame {
    DataFrame::new(vec![
        Series::new("id".into(), &[1i64, 2, 3]).into_column(),
        Series::new("tons".into(), &[Some(2.5f64), None, Some(40.0)]).into_column(),
        Series::new("note".into(), &[Some("a, b"), Some("plain"), None]).into_column(),
    ])
    .expect("df")
}

#[test]
fn writes_header_values_and_empty_nulls() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out.csv");

    write_frame_csv(&frame(), &path).expect("write");
    let content = fs::read_to_string(&path).expect("read");

    insta::assert_snapshot!(content, @r#"
    id,tons,note
    1,2.5,"a, b"
    2,,plain
    3,40,
    "#);
}

#[test]
fn overwrites_existing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out.csv");
    fs::write(&path, "stale content that is longer than the new file\n".repeat(10))
        .expect("seed");

    let df = DataFrame::new(vec![Series::new("v".into(), &[1i64]).into_column()]).expect("df");
    write_frame_csv(&df, &path).expect("write");

    assert_eq!(fs::read_to_string(&path).expect("read"), "v\n1\n");
}

#[test]
fn header_only_for_empty_frame() {
    let dir = tempfile::tempdir().expect("tempdir");
    let df = DataFrame::new(vec![
        Series::new("issue_type".into(), Vec::<String>::new()).into_column(),
        Series::new("count".into(), Vec::<u64>::new()).into_column(),
    ])
    .expect("df");

    let path = write_issues(&df, dir.path()).expect("write");
    assert_eq!(fs::read_to_string(path).expect("read"), "issue_type,count\n");
}

#[test]
fn reserved_output_names() {
    let dir = tempfile::tempdir().expect("tempdir");
    let df = frame();

    let merged = write_merged(&df, dir.path()).expect("merged");
    let cleaned = write_cleaned(&df, dir.path()).expect("cleaned");
    let profile = write_profile(&df, dir.path()).expect("profile");
    let issues = write_issues(&df, dir.path()).expect("issues");

    assert_eq!(merged, dir.path().join("FAF5_MERGED.csv"));
    assert_eq!(cleaned, dir.path().join("FAF5_MERGED_CLEANED.csv"));
    assert_eq!(profile, dir.path().join("FAF5_VALIDATION_COLUMNS.csv"));
    assert_eq!(issues, dir.path().join("FAF5_VALIDATION_ISSUES.csv"));
}

#[test]
fn missing_directory_is_a_write_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = write_merged(&frame(), &dir.path().join("missing")).expect_err("no dir");
    assert!(matches!(err, orbis_output::OutputError::Write { .. }));
}
