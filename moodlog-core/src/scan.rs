use std::fs;
use std::path::{Path, PathBuf};

use crate::error::EntryError;
use crate::paths::is_entry;

/// Returns the entry files directly inside `dir`, oldest first.
pub fn list_entries(dir: &Path) -> Result<Vec<PathBuf>, EntryError> {
    let info = fs::metadata(dir).map_err(|e| EntryError::from_read(dir, e))?;
    if !info.is_dir() {
        return Err(EntryError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut entries = Vec::new();
    for item in fs::read_dir(dir).map_err(|e| EntryError::from_read(dir, e))? {
        let item = item.map_err(|e| EntryError::from_read(dir, e))?;
        let path = item.path();
        let is_file = item
            .file_type()
            .map_err(|e| EntryError::from_read(&path, e))?
            .is_file();
        if is_file && is_entry(&path) {
            entries.push(path);
        }
    }
    // ISO date prefix, so name order is date order
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}
