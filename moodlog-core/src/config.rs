use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding one entry file per day.
    pub journal_dir: PathBuf,
    /// Preferred editor binary. Optional; the CLI falls back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    journal_dir: Option<PathBuf>,
    editor: Option<String>,
}

impl Config {
    /// Loads the first config file found (XDG path, then the native one) and applies defaults.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config()?;
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        Self {
            journal_dir: file_config
                .journal_dir
                .unwrap_or_else(Self::default_journal_dir),
            editor: file_config.editor,
        }
    }

    /// Default journal root: `{data_dir}/moodlog`
    /// - macOS:   `~/Library/Application Support/moodlog`
    /// - Linux:   `$XDG_DATA_HOME/moodlog` or `~/.local/share/moodlog`
    /// - Windows: `%APPDATA%\moodlog`
    fn default_journal_dir() -> PathBuf {
        match BaseDirs::new() {
            Some(base) => base.data_dir().join("moodlog"),
            None => PathBuf::from("./moodlog"),
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            v.push(b.home_dir().join(".config").join("moodlog").join("config.toml"));
            v.push(b.config_dir().join("moodlog").join("config.toml"));
        }
        v
    }

    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            debug!(path = %path.display(), "reading config");
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let c = Config::config_file_paths();
            assert_eq!(
                c.first(),
                Some(&b.home_dir().join(".config/moodlog/config.toml"))
            );
            assert_eq!(c.get(1), Some(&b.config_dir().join("moodlog/config.toml")));
        }
    }

    #[test]
    fn parse_file_accepts_journal_dir_and_editor() {
        let toml = r#"
            journal_dir = "/tmp/my-journal"
            editor = "hx"
        "#;
        let fc = Config::parse_file(toml).unwrap();
        assert_eq!(
            fc.journal_dir.as_deref(),
            Some(Path::new("/tmp/my-journal"))
        );
        assert_eq!(fc.editor.as_deref(), Some("hx"));
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let fc = Config::parse_file("").unwrap();
        let config = Config::from_file_config(fc);
        assert!(config.journal_dir.ends_with("moodlog"));
        assert_eq!(config.editor, None);
    }

    #[test]
    fn parse_file_rejects_wrong_types() {
        assert!(Config::parse_file("journal_dir = 3").is_err());
    }
}
