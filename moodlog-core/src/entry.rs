//! The daily journal `Entry`: one file per day, metadata block first, free text after.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs::{self, File};
use std::io::{BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, error, info};

use crate::error::EntryError;
use crate::front_matter;
use crate::paths::{ENTRY_FORMAT, parse_entry_date};
use crate::prompt::prompt_for_metadata;

/// Fields stored in the metadata block at the top of an entry file.
///
/// Moods are rated 1 to 5; 0 means the rating has not been collected yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(rename = "seconds", alias = "Seconds", deserialize_with = "null_as_zero")]
    pub seconds: u16,
    #[serde(rename = "lowmood", alias = "LowMood", deserialize_with = "null_as_zero")]
    pub low_mood: u8,
    #[serde(rename = "highmood", alias = "HighMood", deserialize_with = "null_as_zero")]
    pub high_mood: u8,
    #[serde(rename = "averagemood", alias = "AverageMood", deserialize_with = "null_as_zero")]
    pub average_mood: u8,
}

/// A key present with no value (`lowmood:` or `lowmood: ~`) reads as unset.
fn null_as_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone)]
pub struct Entry {
    pub metadata: Metadata,
    /// Everything after the metadata block, byte for byte.
    pub body: Vec<u8>,
    /// Location of the backing file. Derived, never stored in the file.
    pub path: PathBuf,
    /// Last observed modification time of the backing file.
    pub mod_time: SystemTime,
}

impl Entry {
    /// Returns the entry for `now` in `dir`, loading it if the file exists or
    /// creating and saving an empty one otherwise.
    pub fn resolve(dir: impl AsRef<Path>, now: DateTime<Local>) -> Result<Self, EntryError> {
        let dir = dir.as_ref();
        let info = fs::metadata(dir).map_err(|e| EntryError::from_read(dir, e))?;
        if !info.is_dir() {
            return Err(EntryError::NotADirectory {
                path: dir.to_path_buf(),
            });
        }

        let mut entry = Entry {
            metadata: Metadata::default(),
            body: Vec::new(),
            path: dir.join(now.format(ENTRY_FORMAT).to_string()),
            mod_time: now.into(),
        };

        let exists = entry
            .path
            .try_exists()
            .map_err(|e| EntryError::from_read(&entry.path, e))?;
        if exists {
            debug!(path = %entry.path.display(), "loading existing entry");
            entry.load()?;
        } else {
            info!(path = %entry.path.display(), "creating new entry");
            entry.save()?;
        }
        Ok(entry)
    }

    /// Binds to the existing entry file at `path` and loads it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, EntryError> {
        let mut entry = Entry {
            metadata: Metadata::default(),
            body: Vec::new(),
            path: path.into(),
            mod_time: SystemTime::UNIX_EPOCH,
        };
        entry.load()?;
        Ok(entry)
    }

    /// Reads the backing file into this entry.
    ///
    /// Returns true when the file's modification time differs from the one
    /// last observed, meaning something else touched it in between. The flag
    /// is advisory; nothing is locked or merged.
    pub fn load(&mut self) -> Result<bool, EntryError> {
        let mut file = File::open(&self.path).map_err(|e| EntryError::from_read(&self.path, e))?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|e| EntryError::from_read(&self.path, e))?;
        let observed = file
            .metadata()
            .and_then(|m| m.modified())
            .map_err(|e| EntryError::from_read(&self.path, e))?;

        let modified = observed != self.mod_time;
        self.mod_time = observed;
        if modified {
            debug!(path = %self.path.display(), "entry changed since it was last read");
        }

        let (metadata, body) = front_matter::split(&data).map_err(|e| EntryError::Parse {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        self.metadata = metadata;
        self.body = body.to_vec();
        debug!(path = %self.path.display(), bytes = data.len(), "loaded entry");
        Ok(modified)
    }

    /// Writes the metadata block followed by the unchanged body, replacing the file.
    pub fn save(&self) -> Result<(), EntryError> {
        let mut content =
            front_matter::render(&self.metadata).map_err(|source| EntryError::Serialize {
                path: self.path.clone(),
                source,
            })?;
        let header_len = content.len();
        content.extend_from_slice(&self.body);

        if let Err(source) = fs::write(&self.path, &content) {
            error!(
                path = %self.path.display(),
                metadata = %String::from_utf8_lossy(&content[..header_len]),
                body = %String::from_utf8_lossy(&self.body),
                "failed to save entry, dumping its content"
            );
            return Err(EntryError::Write {
                path: self.path.clone(),
                source,
            });
        }
        debug!(path = %self.path.display(), bytes = content.len(), "saved entry");
        Ok(())
    }

    /// The day this entry belongs to, read back from its file name.
    pub fn date(&self) -> Result<NaiveDate, EntryError> {
        parse_entry_date(&self.path)
    }

    /// Maximal runs of non-whitespace bytes in the body.
    pub fn words(&self) -> Vec<&[u8]> {
        self.body
            .split(|b| b.is_ascii_whitespace())
            .filter(|w| !w.is_empty())
            .collect()
    }

    /// Adds elapsed time to `seconds`, stopping at `u16::MAX`.
    pub fn add_seconds(&mut self, seconds: u64) {
        let total = u64::from(self.metadata.seconds).saturating_add(seconds);
        self.metadata.seconds = u16::try_from(total).unwrap_or(u16::MAX);
    }

    /// Asks on `output` for every mood rating that is still unset, reading answers from `input`.
    pub fn prompt_for_metadata<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), EntryError> {
        prompt_for_metadata(&mut self.metadata, input, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::time::Duration;
    use tempfile::tempdir;

    fn july_fourth() -> DateTime<Local> {
        Local.with_ymd_and_hms(2023, 7, 4, 21, 30, 0).unwrap()
    }

    #[test]
    fn resolve_creates_and_saves_new_entry() {
        let tmp = tempdir().unwrap();
        let entry = Entry::resolve(tmp.path(), july_fourth()).unwrap();

        assert_eq!(
            entry.path,
            tmp.path().join("2023-07-04-Journal-Entry-for-Jul-4.md")
        );
        assert_eq!(entry.metadata, Metadata::default());
        assert!(entry.body.is_empty());
        assert_eq!(entry.mod_time, SystemTime::from(july_fourth()));

        let written = fs::read_to_string(&entry.path).unwrap();
        assert_eq!(
            written,
            "---\nseconds: 0\nlowmood: 0\nhighmood: 0\naveragemood: 0\n---\n"
        );
    }

    #[test]
    fn resolve_loads_existing_entry() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("2023-07-04-Journal-Entry-for-Jul-4.md");
        fs::write(
            &path,
            "---\nseconds: 300\nlowmood: 2\nhighmood: 4\naveragemood: 3\n---\nWent swimming.\n",
        )
        .unwrap();

        let entry = Entry::resolve(tmp.path(), july_fourth()).unwrap();
        assert_eq!(entry.metadata.seconds, 300);
        assert_eq!(entry.metadata.low_mood, 2);
        assert_eq!(entry.metadata.high_mood, 4);
        assert_eq!(entry.metadata.average_mood, 3);
        assert_eq!(entry.body, b"Went swimming.\n");
        assert_ne!(entry.mod_time, SystemTime::from(july_fourth()));
    }

    #[test]
    fn resolve_rejects_missing_directory() {
        let tmp = tempdir().unwrap();
        let err = Entry::resolve(tmp.path().join("nope"), july_fourth()).unwrap_err();
        assert!(matches!(err, EntryError::NotFound { .. }));
    }

    #[test]
    fn resolve_rejects_file_as_directory() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, "hi").unwrap();
        let err = Entry::resolve(&file, july_fourth()).unwrap_err();
        assert!(matches!(err, EntryError::NotADirectory { .. }));
    }

    #[test]
    fn resolve_surfaces_malformed_metadata() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("2023-07-04-Journal-Entry-for-Jul-4.md");
        fs::write(&path, "---\nlowmood: [1, 2]\n---\n").unwrap();
        let err = Entry::resolve(tmp.path(), july_fourth()).unwrap_err();
        assert!(matches!(err, EntryError::Parse { .. }));
    }

    #[test]
    fn save_then_load_preserves_metadata_and_body() {
        let tmp = tempdir().unwrap();
        let mut entry = Entry::resolve(tmp.path(), july_fourth()).unwrap();
        let body: Vec<u8> = b"\n---\nlooks like a delimiter\n\t\xff\x00 tail without newline".to_vec();
        entry.metadata = Metadata {
            seconds: u16::MAX,
            low_mood: 1,
            high_mood: 5,
            average_mood: 3,
        };
        entry.body = body.clone();
        entry.save().unwrap();

        let reloaded = Entry::open(&entry.path).unwrap();
        assert_eq!(reloaded.metadata, entry.metadata);
        assert_eq!(reloaded.body, body);
    }

    #[test]
    fn load_replaces_in_memory_state() {
        let tmp = tempdir().unwrap();
        let mut entry = Entry::resolve(tmp.path(), july_fourth()).unwrap();
        entry.metadata.high_mood = 5;
        entry.body = b"unsaved".to_vec();

        entry.load().unwrap();
        assert_eq!(entry.metadata, Metadata::default());
        assert!(entry.body.is_empty());
    }

    #[test]
    fn load_reports_external_modification() {
        let tmp = tempdir().unwrap();
        let mut entry = Entry::resolve(tmp.path(), july_fourth()).unwrap();

        // creation records `now`, not the file's own timestamp
        assert!(entry.load().unwrap());
        assert!(!entry.load().unwrap());

        let file = File::options().write(true).open(&entry.path).unwrap();
        file.set_modified(SystemTime::now() + Duration::from_secs(60))
            .unwrap();
        drop(file);
        assert!(entry.load().unwrap());
        assert!(!entry.load().unwrap());
    }

    #[test]
    fn load_of_deleted_file_is_not_found() {
        let tmp = tempdir().unwrap();
        let mut entry = Entry::resolve(tmp.path(), july_fourth()).unwrap();
        fs::remove_file(&entry.path).unwrap();
        assert!(matches!(
            entry.load().unwrap_err(),
            EntryError::NotFound { .. }
        ));
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let tmp = tempdir().unwrap();
        let mut entry = Entry::resolve(tmp.path(), july_fourth()).unwrap();
        entry.path = tmp.path().join("gone").join("entry.md");
        assert!(matches!(
            entry.save().unwrap_err(),
            EntryError::Write { .. }
        ));
    }

    #[test]
    fn date_comes_from_file_name() {
        let tmp = tempdir().unwrap();
        let entry = Entry::resolve(tmp.path(), july_fourth()).unwrap();
        assert_eq!(
            entry.date().unwrap(),
            NaiveDate::from_ymd_opt(2023, 7, 4).unwrap()
        );
    }

    #[test]
    fn date_fails_for_renamed_file() {
        let tmp = tempdir().unwrap();
        let mut entry = Entry::resolve(tmp.path(), july_fourth()).unwrap();
        entry.path = tmp.path().join("today.md");
        assert!(matches!(
            entry.date().unwrap_err(),
            EntryError::Parse { .. }
        ));
    }

    #[test]
    fn words_are_maximal_non_whitespace_runs() {
        let tmp = tempdir().unwrap();
        let mut entry = Entry::resolve(tmp.path(), july_fourth()).unwrap();

        entry.body = b"  hello   world\n".to_vec();
        assert_eq!(entry.words(), vec![&b"hello"[..], &b"world"[..]]);

        entry.body = b"it's\tfine,\r\nreally...".to_vec();
        assert_eq!(
            entry.words(),
            vec![&b"it's"[..], &b"fine,"[..], &b"really..."[..]]
        );

        entry.body = b" \n\t ".to_vec();
        assert!(entry.words().is_empty());
    }

    #[test]
    fn add_seconds_saturates() {
        let tmp = tempdir().unwrap();
        let mut entry = Entry::resolve(tmp.path(), july_fourth()).unwrap();
        entry.add_seconds(90);
        entry.add_seconds(30);
        assert_eq!(entry.metadata.seconds, 120);
        entry.add_seconds(u64::MAX);
        assert_eq!(entry.metadata.seconds, u16::MAX);
    }
}
