//! Explicit column kind, replacing dtype inference from values.

use polars::prelude::DataType;

/// How the pipeline treats a column.
///
/// Cleaning moves columns between kinds: `Mixed` becomes `Text` during text
/// standardization and `Text` may become `Numeric` during coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Text,
    Numeric,
    Mixed,
}

impl ColumnKind {
    /// Classifies a polars dtype.
    pub fn of(dtype: &DataType) -> Self {
        match dtype {
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64 => Self::Numeric,
            DataType::String => Self::Text,
            _ => Self::Mixed,
        }
    }

    pub fn is_numeric(self) -> bool {
        self == Self::Numeric
    }

    /// Text and mixed columns are both subject to string cleaning.
    pub fn is_textual(self) -> bool {
        matches!(self, Self::Text | Self::Mixed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Numeric => "numeric",
            Self::Mixed => "mixed",
        }
    }
}
