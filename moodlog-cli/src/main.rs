mod cli;
mod cli_modes;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use cli_modes::{CliModeResult, list_mode, path_mode, today_mode, use_color};
use moodlog_core::Config;
use render::{RenderOptions, Renderer};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("moodlog: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load()?;
    if let Some(dir) = &cli.dir {
        config.journal_dir = dir.clone();
    }

    let renderer = Renderer::new(Some(RenderOptions {
        date_format: "%a, %d %b %Y".to_string(),
        use_color: use_color(&cli),
    }));

    if let CliModeResult::Finish = path_mode(&cli, &renderer, &config)? {
        return Ok(());
    }
    if let CliModeResult::Finish = list_mode(&cli, &renderer, &config)? {
        return Ok(());
    }
    today_mode(&cli, &renderer, &config)?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "moodlog_core=debug,moodlog=debug"
    } else {
        "moodlog_core=warn,moodlog=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
