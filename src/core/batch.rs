use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::RunnerError;

/// One matching directory entry, ordered by its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub name: String,
    pub path: PathBuf,
}

/// Lists `directory`, keeps entries whose name ends with `suffix` and sorts
/// them by name.
pub fn collect_batch(directory: &Path, suffix: &str) -> Result<Vec<BatchEntry>, RunnerError> {
    let read_dir = fs::read_dir(directory).map_err(|source| RunnerError::ReadDir {
        path: directory.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| RunnerError::ReadDir {
            path: directory.to_path_buf(),
            source,
        })?;
        let raw_name: OsString = entry.file_name();
        let name = raw_name.to_string_lossy().into_owned();

        if !name.ends_with(suffix) {
            continue;
        }

        entries.push(BatchEntry {
            path: directory.join(&raw_name),
            name,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
