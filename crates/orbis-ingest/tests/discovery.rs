//! Tests for source file discovery.

use std::fs;
use std::path::Path;

use orbis_ingest::{IngestError, eligible_file_names, list_source_files};

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), "a,b\n1,2\n").expect("write file");
}

fn names(dir: &Path) -> Vec<String> {
    list_source_files(dir)
        .expect("list sources")
        .iter()
        .map(|path| path.file_name().expect("name").to_string_lossy().into_owned())
        .collect()
}

#[test]
fn lists_csv_files_sorted_and_skips_outputs() {
    let dir = tempfile::tempdir().expect("tempdir");
    touch(dir.path(), "b.csv");
    touch(dir.path(), "A.CSV");
    touch(dir.path(), "c.Csv");
    touch(dir.path(), "notes.txt");
    touch(dir.path(), "FAF5_MERGED.csv");
    touch(dir.path(), "FAF5_MERGED_CLEANED.csv");
    touch(dir.path(), "FAF5_VALIDATION_COLUMNS.csv");
    touch(dir.path(), "FAF5_VALIDATION_ISSUES.csv");

    assert_eq!(names(dir.path()), vec!["A.CSV", "b.csv", "c.Csv"]);
}

#[test]
fn ignores_directories_named_like_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::create_dir(dir.path().join("nested.csv")).expect("mkdir");
    touch(dir.path(), "real.csv");

    assert_eq!(names(dir.path()), vec!["real.csv"]);
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("FAF5");

    let err = list_source_files(&missing).expect_err("missing dir");
    assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
}

#[test]
fn file_path_is_not_a_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    touch(dir.path(), "a.csv");

    let err = list_source_files(&dir.path().join("a.csv")).expect_err("not a dir");
    assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
}

#[test]
fn eligible_names_are_base_names() {
    let dir = tempfile::tempdir().expect("tempdir");
    touch(dir.path(), "x.csv");
    touch(dir.path(), "FAF5_MERGED.csv");

    let names = eligible_file_names(dir.path()).expect("names");
    assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["x.csv"]);
}
