//! Error type shared by the entry model, the metadata prompter and the directory scan.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("{} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("{} must be a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("reading {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("writing {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("serializing metadata for {}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The metadata block is malformed, or a file name is not an entry name.
    #[error("parsing {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("reading answer")]
    InputStream(#[source] io::Error),

    #[error("writing prompt")]
    OutputStream(#[source] io::Error),
}

impl EntryError {
    /// Maps an I/O error on `path` to `NotFound` when the file is missing, `Read` otherwise.
    pub(crate) fn from_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            EntryError::NotFound { path }
        } else {
            EntryError::Read { path, source }
        }
    }
}
