//! Reserved output filenames and the source-file eligibility rule.

/// Concatenated raw rows plus `source_file`.
pub const MERGED_FILE: &str = "FAF5_MERGED.csv";
/// Table after the five cleaning steps.
pub const CLEANED_FILE: &str = "FAF5_MERGED_CLEANED.csv";
/// Per-column profile table.
pub const VALIDATION_COLUMNS_FILE: &str = "FAF5_VALIDATION_COLUMNS.csv";
/// Issues table.
pub const VALIDATION_ISSUES_FILE: &str = "FAF5_VALIDATION_ISSUES.csv";

/// Files the pipeline writes into the source directory. Never ingested.
pub const RESERVED_OUTPUTS: [&str; 4] = [
    MERGED_FILE,
    CLEANED_FILE,
    VALIDATION_COLUMNS_FILE,
    VALIDATION_ISSUES_FILE,
];

/// Column that tags every merged row with the file it came from.
pub const SOURCE_FILE_COLUMN: &str = "source_file";

/// Case-insensitive `.csv` extension check on a bare filename.
pub fn has_csv_extension(file_name: &str) -> bool {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Whether a filename is an input extract: a `.csv` file that is not one of
/// the reserved outputs.
pub fn is_eligible_source(file_name: &str) -> bool {
    has_csv_extension(file_name) && !RESERVED_OUTPUTS.contains(&file_name)
}
