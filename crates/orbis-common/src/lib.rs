//! Shared utilities for orbis crates.
//!
//! This crate provides common helpers used across the orbis workspace,
//! mostly around reading values out of Polars columns.

pub mod polars;

pub use polars::{
    any_to_f64, any_to_string, cell_text, format_numeric, parse_f64, parse_i64, round_ratio,
    round6,
};
