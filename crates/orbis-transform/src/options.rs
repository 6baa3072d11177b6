//! Cleaning configuration.

use crate::error::{Result, TransformError};

/// Fraction of non-null values that must parse as numbers before a text
/// column is converted.
pub const DEFAULT_NUMERIC_THRESHOLD: f64 = 0.9;

/// Options for [`clean_frame`](crate::clean_frame).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CleanOptions {
    pub numeric_threshold: f64,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            numeric_threshold: DEFAULT_NUMERIC_THRESHOLD,
        }
    }
}

impl CleanOptions {
    /// Options with a custom numeric threshold.
    pub fn with_numeric_threshold(threshold: f64) -> Result<Self> {
        let options = Self {
            numeric_threshold: threshold,
        };
        options.validate()?;
        Ok(options)
    }

    /// Rejects thresholds outside `(0, 1]`, including NaN.
    pub fn validate(&self) -> Result<()> {
        let value = self.numeric_threshold;
        if value > 0.0 && value <= 1.0 {
            Ok(())
        } else {
            Err(TransformError::InvalidThreshold { value })
        }
    }
}
