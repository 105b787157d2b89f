//! Command-line argument definitions for `plume`.
//!
//! Uses [`clap`] derive macros for argument parsing. The version flag uses
//! short `-v` (not clap's default `-V`) to match the historical tool surface.

use clap::Parser;

/// Prettify newline-delimited JSON log lines from stdin.
///
/// Reads JSON log lines from stdin, outputs human-readable colorized text
/// to stdout. Lines that are not well-formed log records pass through
/// unchanged.
#[derive(Debug, Parser)]
#[command(name = "plume", version, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Only translate the `time` field to ISO-8601, keeping lines as JSON.
    #[arg(short = 't', long = "time-only")]
    pub time_only: bool,

    /// Print the level token before the timestamp.
    #[arg(short = 'l', long = "level-first")]
    pub level_first: bool,

    /// Force ANSI colors even when stdout is not a terminal.
    #[arg(short = 'c', long = "force-color")]
    pub force_color: bool,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Print version.
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: Option<bool>,
}
