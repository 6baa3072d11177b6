//! End-to-end tests for the cleaning sequence.

use orbis_transform::{CleanOptions, TransformError, clean_frame};
use polars::prelude::*;

fn merged_frame() -> DataFrame {
    DataFrame::new(vec![
        Series::new(" Total Cost ($) ".into(), &[Some("10 "), Some(" 10"), Some("")]).into_column(),
        Series::new("SKU-ID".into(), &[Some(" A "), Some("A"), Some("B")]).into_column(),
        Series::new("empty".into(), &[None::<&str>, None, None]).into_column(),
    ])
    .expect("df")
}

#[test]
fn cleans_names_values_columns_and_rows() {
    let out = clean_frame(&merged_frame(), &CleanOptions::default()).expect("clean");

    assert_eq!(out.get_column_names_str(), vec!["total_cost", "sku_id"]);
    assert_eq!(out.height(), 2);

    let cost = out.column("total_cost").expect("total_cost");
    assert_eq!(cost.dtype(), &DataType::Int64);
    let cost = cost.i64().expect("i64");
    assert_eq!(cost.get(0), Some(10));
    assert_eq!(cost.get(1), None);

    let sku = out.column("sku_id").expect("sku_id").str().expect("str");
    assert_eq!(sku.get(0), Some("A"));
    assert_eq!(sku.get(1), Some("B"));
}

#[test]
fn input_frame_is_not_mutated() {
    let df = merged_frame();
    let _ = clean_frame(&df, &CleanOptions::default()).expect("clean");

    assert_eq!(df.width(), 3);
    assert_eq!(df.height(), 3);
    assert_eq!(df.get_column_names_str()[0], " Total Cost ($) ");
}

#[test]
fn collision_suffixes_follow_column_order() {
    let df = DataFrame::new(vec![
        Series::new("Tons".into(), &["1"]).into_column(),
        Series::new("tons ".into(), &["2"]).into_column(),
        Series::new("TONS!".into(), &["3"]).into_column(),
    ])
    .expect("df");

    let out = clean_frame(&df, &CleanOptions::default()).expect("clean");
    assert_eq!(out.get_column_names_str(), vec!["tons", "tons_2", "tons_3"]);
}

#[test]
fn invalid_threshold_is_rejected() {
    let options = CleanOptions {
        numeric_threshold: 0.0,
    };
    let err = clean_frame(&merged_frame(), &options).expect_err("threshold");
    assert!(matches!(err, TransformError::InvalidThreshold { .. }));
}
