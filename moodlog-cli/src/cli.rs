use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::render::ColorMode;

/// moodlog — one plain-text journal entry per day, with mood ratings
#[derive(Parser, Debug)]
#[command(
    name = "moodlog",
    version,
    about,
    group(ArgGroup::new("solo").args(["path", "list"]).conflicts_with_all(["no_edit", "no_prompt"])),
)]
pub struct Cli {
    /// Prints the journal directory
    #[arg(long, short)]
    pub path: bool,
    /// Lists every entry in the journal directory with its moods and word count.
    #[arg(long, short)]
    pub list: bool,
    /// Journal directory, overriding `journal_dir` from the config file.
    #[arg(long, short, env = "MOODLOG_DIR")]
    pub dir: Option<PathBuf>,
    /// Don't open today's entry in the editor.
    #[arg(long)]
    pub no_edit: bool,
    /// Don't ask for missing mood ratings.
    #[arg(long)]
    pub no_prompt: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Log debug details to stderr. `RUST_LOG` takes precedence when set.
    #[arg(long, short)]
    pub verbose: bool,
}
