//! Tests for the SQLite analytical store.
#![cfg(feature = "sqlite")]

use orbis_output::{AnalyticalStore, CLEANED_TABLE, ISSUES_TABLE, SqliteStore, export_run};
use polars::prelude::*;

fn cleaned() -> DataFrame {
    DataFrame::new(vec![
        Series::new("origin".into(), &[Some("east"), None]).into_column(),
        Series::new("tons".into(), &[1.5f64, -2.0]).into_column(),
        Series::new("year".into(), &[2017i64, 2018]).into_column(),
    ])
    .expect("df")
}

fn issues() -> DataFrame {
    DataFrame::new(vec![
        Series::new("issue_type".into(), &["negative_values"]).into_column(),
        Series::new("column".into(), &["tons"]).into_column(),
        Series::new("count".into(), &[1u64]).into_column(),
        Series::new("pct".into(), &[0.5f64]).into_column(),
        Series::new("details".into(), &["Sample row indices: [1]"]).into_column(),
    ])
    .expect("df")
}

#[test]
fn exports_tagged_tables() {
    let mut store = SqliteStore::in_memory().expect("store");
    let counts = export_run(&mut store, &cleaned(), &issues(), "run-1").expect("export");
    assert_eq!(counts.cleaned, 2);
    assert_eq!(counts.issues, 1);

    let conn = store.connection().expect("connection");
    let (origin, tons, year, run_id): (Option<String>, f64, i64, String) = conn
        .query_row(
            &format!("SELECT origin, tons, year, run_id FROM {CLEANED_TABLE} WHERE year = 2018"),
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
        )
        .expect("query");
    assert_eq!(origin, None);
    assert_eq!(tons, -2.0);
    assert_eq!(year, 2018);
    assert_eq!(run_id, "run-1");

    let details: String = conn
        .query_row(&format!("SELECT details FROM {ISSUES_TABLE}"), [], |row| {
            row.get(0)
        })
        .expect("query");
    assert_eq!(details, "Sample row indices: [1]");
}

#[test]
fn replacing_overwrites_previous_rows() {
    let mut store = SqliteStore::in_memory().expect("store");
    store.replace_table("t", &cleaned()).expect("first");

    let smaller = DataFrame::new(vec![Series::new("only".into(), &["x"]).into_column()])
        .expect("df");
    let rows = store.replace_table("t", &smaller).expect("second");
    assert_eq!(rows, 1);

    let columns: i64 = store
        .connection()
        .expect("connection")
        .query_row("SELECT COUNT(*) FROM pragma_table_info('t')", [], |row| {
            row.get(0)
        })
        .expect("pragma");
    assert_eq!(columns, 1);
}

#[test]
fn file_backed_store_persists() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("orbis.sqlite");

    {
        let mut store = SqliteStore::open(&path).expect("open");
        export_run(&mut store, &cleaned(), &issues(), "run-2").expect("export");
    }

    let store = SqliteStore::open(&path).expect("reopen");
    let rows: i64 = store
        .connection()
        .expect("connection")
        .query_row(&format!("SELECT COUNT(*) FROM {CLEANED_TABLE}"), [], |row| {
            row.get(0)
        })
        .expect("count");
    assert_eq!(rows, 2);
}

#[test]
fn deferred_store_creates_file_on_first_export() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("orbis.sqlite");

    let mut store = SqliteStore::deferred(&path);
    assert!(!path.exists());
    assert!(store.connection().is_none());

    export_run(&mut store, &cleaned(), &issues(), "run-3").expect("export");
    assert!(path.exists());
    assert!(store.connection().is_some());
}
