//! Source file discovery.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use orbis_model::is_eligible_source;

use crate::error::{IngestError, Result};

/// Lists the eligible source CSV files in a directory.
///
/// Regular files with a case-insensitive `.csv` extension, minus the reserved
/// output names, sorted by filename.
pub fn list_source_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let eligible = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(is_eligible_source);
        if eligible {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Base names of the eligible source files, for membership checks.
pub fn eligible_file_names(dir: &Path) -> Result<BTreeSet<String>> {
    Ok(list_source_files(dir)?
        .iter()
        .filter_map(|path| path.file_name().and_then(|n| n.to_str()))
        .map(str::to_string)
        .collect())
}
