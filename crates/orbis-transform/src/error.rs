use thiserror::Error;

/// Errors raised while cleaning a frame.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Numeric threshold outside `(0, 1]`.
    #[error("numeric threshold must be in (0, 1], got {value}")]
    InvalidThreshold { value: f64 },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
