use super::{
    CliModeResult,
    editor_utils::{open_file_in_editor, resolve_editor},
};
use crate::{cli::Cli, render::Renderer};
use anyhow::{Context, Result};
use chrono::Local;
use moodlog_core::{Config, Entry};
use std::{fs, io, time::Instant};
use tracing::info;

/// Finds or creates today's entry, lets the user write in it, then collects missing moods.
pub fn today_mode(cli: &Cli, renderer: &Renderer, config: &Config) -> Result<CliModeResult> {
    fs::create_dir_all(&config.journal_dir)
        .with_context(|| format!("creating {}", config.journal_dir.display()))?;
    let mut entry = Entry::resolve(&config.journal_dir, Local::now())?;

    if !cli.no_edit {
        // A fresh entry carries `now` as its mod time; sync it with the file
        // so only the editor's own writes count as a change.
        entry.load()?;
        let editor = resolve_editor(&config.editor);
        let started = Instant::now();
        open_file_in_editor(&editor, &entry.path)?;
        let elapsed = started.elapsed().as_secs();
        if entry.load()? {
            info!(path = %entry.path.display(), "picked up changes from the editor");
        }
        entry.add_seconds(elapsed);
    }

    // Whatever was answered before the input closed is still worth saving.
    let prompted = if cli.no_prompt {
        Ok(())
    } else {
        let mut input = io::stdin().lock();
        let mut output = io::stdout();
        entry.prompt_for_metadata(&mut input, &mut output)
    };
    entry.save()?;
    prompted?;

    renderer.print_info(&format!("Saved entry {}", entry.path.display()));
    renderer.print_entry_line(&entry);
    Ok(CliModeResult::Finish)
}
