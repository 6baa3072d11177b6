//! Cleaning for merged FAF5 tables.
//!
//! Cleaning is a fixed sequence of five steps, each a function from a borrowed
//! frame to a new frame:
//!
//! 1. [`normalize_column_names`]
//! 2. [`standardize_text`]
//! 3. [`coerce_numeric_columns`]
//! 4. [`drop_empty_columns`]
//! 5. [`remove_duplicate_rows`]
//!
//! [`clean_frame`] runs them in order.

pub mod clean;
pub mod coerce;
pub mod dedupe;
pub mod error;
pub mod names;
pub mod options;
pub mod prune;
pub mod standardize;

pub use clean::clean_frame;
pub use coerce::coerce_numeric_columns;
pub use dedupe::{count_duplicate_rows, first_occurrence_mask, remove_duplicate_rows};
pub use error::{Result, TransformError};
pub use names::{normalize_column_name, normalize_column_names};
pub use options::{CleanOptions, DEFAULT_NUMERIC_THRESHOLD};
pub use prune::drop_empty_columns;
pub use standardize::standardize_text;
