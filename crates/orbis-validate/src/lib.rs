//! Profiling and validation of cleaned tables.
//!
//! [`profile_columns`] summarizes each column; [`gather_validation_issues`]
//! runs the fixed battery of data-quality checks. Both come in a typed form
//! ([`column_profiles`], [`collect_issues`]) and a DataFrame form for output.

mod checks;
pub mod error;
pub mod issues;
pub mod profile;

pub use error::{Result, ValidateError};
pub use issues::{collect_issues, gather_validation_issues, issues_frame};
pub use profile::{column_profiles, dtype_label, profile_columns, profiles_frame};
