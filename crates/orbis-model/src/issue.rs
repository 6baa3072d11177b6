//! Data-quality issue records.

use std::fmt;

/// Columns of the issues table, in output order.
pub const ISSUE_COLUMNS: [&str; 5] = ["issue_type", "column", "count", "pct", "details"];

/// Category of a data-quality problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueType {
    MissingValues,
    NegativeValues,
    SourceFileMissing,
    SourceFileNull,
    SourceFileEmpty,
    SourceFileInvalid,
    DuplicateRows,
}

impl IssueType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingValues => "missing_values",
            Self::NegativeValues => "negative_values",
            Self::SourceFileMissing => "source_file_missing",
            Self::SourceFileNull => "source_file_null",
            Self::SourceFileEmpty => "source_file_empty",
            Self::SourceFileInvalid => "source_file_invalid",
            Self::DuplicateRows => "duplicate_rows",
        }
    }

    /// Parse from the serialized name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "missing_values" => Some(Self::MissingValues),
            "negative_values" => Some(Self::NegativeValues),
            "source_file_missing" => Some(Self::SourceFileMissing),
            "source_file_null" => Some(Self::SourceFileNull),
            "source_file_empty" => Some(Self::SourceFileEmpty),
            "source_file_invalid" => Some(Self::SourceFileInvalid),
            "duplicate_rows" => Some(Self::DuplicateRows),
            _ => None,
        }
    }

    /// Row-level issues carry an empty column name.
    pub fn is_row_level(self) -> bool {
        self == Self::DuplicateRows
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One category of problem found in one column (or across rows).
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub issue_type: IssueType,
    /// Empty for row-level issues.
    pub column: String,
    pub count: u64,
    /// `count / rows`, six decimals.
    pub pct: f64,
    pub details: String,
}

impl Issue {
    pub fn new(
        issue_type: IssueType,
        column: impl Into<String>,
        count: u64,
        pct: f64,
        details: impl Into<String>,
    ) -> Self {
        Self {
            issue_type,
            column: column.into(),
            count,
            pct,
            details: details.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_type_names_round_trip() {
        let all = [
            IssueType::MissingValues,
            IssueType::NegativeValues,
            IssueType::SourceFileMissing,
            IssueType::SourceFileNull,
            IssueType::SourceFileEmpty,
            IssueType::SourceFileInvalid,
            IssueType::DuplicateRows,
        ];
        for issue_type in all {
            assert_eq!(IssueType::parse(issue_type.as_str()), Some(issue_type));
        }
        assert_eq!(IssueType::parse("unknown"), None);
    }

    #[test]
    fn only_duplicates_are_row_level() {
        assert!(IssueType::DuplicateRows.is_row_level());
        assert!(!IssueType::MissingValues.is_row_level());
    }
}
