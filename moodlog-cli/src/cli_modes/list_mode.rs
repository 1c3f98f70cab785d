use super::CliModeResult;
use crate::{cli::Cli, render::Renderer};
use anyhow::Result;
use moodlog_core::{Config, Entry, EntryError, list_entries};

pub fn list_mode(cli: &Cli, renderer: &Renderer, config: &Config) -> Result<CliModeResult> {
    if !cli.list {
        return Ok(CliModeResult::NothingToDo);
    }

    let paths = list_entries(&config.journal_dir)?;
    if paths.is_empty() {
        renderer.print_info(&format!(
            "No entries found in {}.",
            config.journal_dir.display()
        ));
        return Ok(CliModeResult::Finish);
    }

    let mut errors: Vec<EntryError> = Vec::new();
    for path in paths {
        match Entry::open(path) {
            Ok(entry) => renderer.print_entry_line(&entry),
            Err(error) => errors.push(error),
        }
    }

    if !errors.is_empty() {
        renderer.print_md("\n# Errors:");
        for error in errors {
            renderer.print_md(&format!("* {:#}", anyhow::Error::from(error)));
        }
    }
    Ok(CliModeResult::Finish)
}
