use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bookspace")]
#[command(about = "Render the Bookspace landing page and preview its animations")]
#[command(version)]
pub struct Args {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the landing page as a static HTML file
    Render(RenderArgs),
    /// Print the hero book counter after a stretch of simulated time
    Counter(CounterArgs),
    /// Print the page's literal content as JSON
    Content,
}

#[derive(clap::Args, Debug, Default)]
pub struct RenderArgs {
    /// Output file (default: dist/index.html)
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Config file (default: bookspace.toml in the working directory, if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Leave out the inline enhancement script
    #[arg(long)]
    pub no_script: bool,

    /// Document title
    #[arg(long)]
    pub title: Option<String>,

    /// Document language
    #[arg(long)]
    pub lang: Option<String>,
}

/// Longest stretch of simulated time the counter preview accepts (one day).
pub const MAX_SIMULATED_MS: u64 = 86_400_000;

#[derive(clap::Args, Debug)]
pub struct CounterArgs {
    /// Simulated milliseconds since the hero mounted
    #[arg(
        long,
        default_value_t = 2000,
        value_parser = clap::value_parser!(u64).range(..=MAX_SIMULATED_MS)
    )]
    pub ms: u64,

    /// Also print the count every N simulated milliseconds
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub sample: Option<u64>,
}
