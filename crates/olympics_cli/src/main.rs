//! `olympics` command-line front end.
//!
//! # Responsibility
//! - Resolve configuration, start logging, open the catalog and dispatch.
//! - Report failures on stderr with a non-zero exit code.

mod cli;
mod handlers;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use olympics_core::{init_logging, AppConfig, Catalog};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.resolve_config(AppConfig::from_env());

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir).context("failed to start logging")?;
    }

    let catalog = Catalog::open(&config.db_path)
        .with_context(|| format!("failed to open catalog `{}`", config.db_path.display()))?;

    let mut stdout = std::io::stdout().lock();
    handlers::dispatch(&catalog, cli.command, &mut stdout)
}
