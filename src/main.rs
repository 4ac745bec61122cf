//! TrendRadar RSS - builds an RSS 2.0 feed from the collected hot news.

mod cli;
mod config;
mod generator;
mod logger;
mod news;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::FeedConfig;
use generator::generate_feed;
use utils::plural_count;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = FeedConfig::load(&cli)?;
    let report = generate_feed(&config)?;

    log!(
        "rss";
        "feed written to {} ({})",
        report.output.display(),
        plural_count(report.items, "item")
    );
    log!("rss"; "public URL: {}", config.public_url());
    Ok(())
}
