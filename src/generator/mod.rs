//! Feed generation pipeline.
//!
//! load -> build -> serialize -> persist. Only the load step recovers from
//! errors; everything after it propagates to the caller.

pub mod channel;

use crate::{
    config::FeedConfig,
    log,
    news::load_news,
    utils::date::DateTimeUtc,
};
use anyhow::{Context, Result};
use rss::{Channel, validation::Validate};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Indentation of the serialized XML.
const INDENT_SIZE: usize = 2;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedReport {
    pub output: PathBuf,
    pub items: usize,
}

/// Run the whole pipeline for `config`.
pub fn generate_feed(config: &FeedConfig) -> Result<FeedReport> {
    let records = load_news(&config.paths.input);
    let channel = channel::build_channel(&config.feed, &records, DateTimeUtc::now());

    // Lenient: readers cope with most of what validation rejects
    if let Err(err) = channel.validate() {
        log!("warning"; "RSS validation: {err}");
    }

    let xml = serialize_feed(&channel)?;
    write_feed(&config.paths.output, &xml)?;

    Ok(FeedReport {
        output: config.paths.output.clone(),
        items: channel.items().len(),
    })
}

/// Serialize to pretty-printed XML with a UTF-8 declaration.
pub fn serialize_feed(channel: &Channel) -> Result<Vec<u8>> {
    let mut xml = channel
        .pretty_write_to(Vec::new(), b' ', INDENT_SIZE)
        .context("Failed to serialize RSS feed")?;
    xml.push(b'\n');
    Ok(xml)
}

/// Write `bytes` to `path`, creating parent directories and replacing any
/// existing file.
pub fn write_feed(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}
