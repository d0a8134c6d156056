//! # bookspace
//!
//! Command-line host for the Bookspace landing page.
//!
//! ## Usage
//!
//! ```bash
//! # Static page (dist/index.html)
//! bookspace render
//!
//! # Where the hero counter stands 500ms after mount
//! bookspace counter --ms 500
//!
//! # Literal page content
//! bookspace content
//! ```

mod args;
mod commands;
mod config;

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use args::{Args, Command};

fn init_tracing(log_level: &str) {
    // Logs go to stderr; stdout carries command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap_or_default()),
        )
        .init();
}

fn run(args: Args) -> Result<()> {
    debug!("bookspace v{}", env!("CARGO_PKG_VERSION"));

    let mut stdout = std::io::stdout().lock();
    match args.command {
        Command::Render(render) => {
            let cwd = std::env::current_dir().context("resolving working directory")?;
            let path = commands::render(&render, &cwd)?;
            writeln!(stdout, "Page written to: {}", path.display())?;
        }
        Command::Counter(counter) => {
            commands::counter(&counter, &mut stdout)?;
        }
        Command::Content => commands::content(&mut stdout)?,
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[bookspace] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
