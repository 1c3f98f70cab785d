use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

use crate::error::EntryError;

/// File extension of every entry file.
pub const ENTRY_EXTENSION: &str = ".md";

/// Format of an entry file name, e.g. `2023-07-04-Journal-Entry-for-Jul-4.md`.
///
/// The same descriptor generates file names and parses dates back out of them.
pub const ENTRY_FORMAT: &str = "%Y-%m-%d-Journal-Entry-for-%b-%-d.md";

static ENTRY_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}-Journal-Entry-for-\S{3}-\d{1,2}\.md$")
        .expect("entry name pattern is valid")
});

pub fn entry_file_name(date: NaiveDate) -> String {
    date.format(ENTRY_FORMAT).to_string()
}

pub fn entry_path(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(entry_file_name(date))
}

/// Parses the date out of the file name component of `path`.
pub fn parse_entry_date(path: &Path) -> Result<NaiveDate, EntryError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| EntryError::Parse {
            path: path.to_path_buf(),
            reason: "path has no file name".to_string(),
        })?;
    NaiveDate::parse_from_str(name, ENTRY_FORMAT).map_err(|e| EntryError::Parse {
        path: path.to_path_buf(),
        reason: format!("file name does not match {ENTRY_FORMAT}: {e}"),
    })
}

/// Returns true if `path` names a file with an entry-like name.
pub fn is_entry(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| ENTRY_NAME.is_match(name))
}
