//! Per-column profile records.

/// Columns of the profile table, in output order.
pub const PROFILE_COLUMNS: [&str; 12] = [
    "column_name",
    "dtype",
    "count",
    "non_null_count",
    "null_count",
    "null_pct",
    "num_unique",
    "min",
    "max",
    "mean",
    "std",
    "sample_values",
];

/// Numeric statistics, or sample values for everything else.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileSummary {
    Numeric {
        min: Option<f64>,
        max: Option<f64>,
        mean: Option<f64>,
        std: Option<f64>,
    },
    Samples(Vec<String>),
}

/// Descriptive statistics for one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnProfile {
    pub column_name: String,
    pub dtype: String,
    pub count: u64,
    pub non_null_count: u64,
    pub null_count: u64,
    pub null_pct: f64,
    pub num_unique: u64,
    pub summary: ProfileSummary,
}

impl ColumnProfile {
    /// Samples joined with `", "`; `None` for numeric columns.
    pub fn sample_values(&self) -> Option<String> {
        match &self.summary {
            ProfileSummary::Samples(values) => Some(values.join(", ")),
            ProfileSummary::Numeric { .. } => None,
        }
    }
}
