pub mod config;
pub mod entry;
pub mod error;
pub mod front_matter;
pub mod paths;
pub mod prompt;
pub mod scan;

pub use config::Config;
pub use entry::{Entry, Metadata};
pub use error::EntryError;
pub use paths::{ENTRY_FORMAT, is_entry};
pub use prompt::{RatingField, prompt_for_metadata};
pub use scan::list_entries;
