pub mod files;
pub mod issue;
pub mod kind;
pub mod profile;

pub use files::{
    CLEANED_FILE, MERGED_FILE, RESERVED_OUTPUTS, SOURCE_FILE_COLUMN, VALIDATION_COLUMNS_FILE,
    VALIDATION_ISSUES_FILE, has_csv_extension, is_eligible_source,
};
pub use issue::{ISSUE_COLUMNS, Issue, IssueType};
pub use kind::ColumnKind;
pub use profile::{ColumnProfile, PROFILE_COLUMNS, ProfileSummary};
