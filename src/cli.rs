//! Command-line interface definitions.
//!
//! Every flag is optional: running the binary bare regenerates the feed
//! from the built-in defaults (or `trendradar.toml` when present).

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// TrendRadar RSS feed generator
#[derive(Parser, Debug, Clone, Default)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: trendradar.toml, skipped if absent)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Hot news data file to read (overrides `paths.input`)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// RSS file to write (overrides `paths.output`)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Show debug output
    #[arg(short, long)]
    pub verbose: bool,
}
