//! Hot news data loading.
//!
//! The collector writes a JSON array of records. This module reads it once
//! per run. [`read_news`] keeps the failure reason; [`load_news`] collapses
//! any failure to an empty list so the feed is still produced.

mod record;

pub use record::NewsRecord;

use crate::{debug, log, utils::plural_count};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Why the data file could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("news data file `{0}` does not exist")]
    NotFound(PathBuf),

    #[error("IO error when reading `{0}`: {1}")]
    Io(PathBuf, #[source] io::Error),

    #[error("invalid news data in `{0}`: {1}")]
    Parse(PathBuf, #[source] serde_json::Error),
}

/// Read and parse the data file.
///
/// The file must hold a JSON array of objects. A leading UTF-8 BOM is
/// accepted.
pub fn read_news(path: &Path) -> Result<Vec<NewsRecord>, LoadError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }
        Err(err) => return Err(LoadError::Io(path.to_path_buf(), err)),
    };

    let json = content.strip_prefix('\u{feff}').unwrap_or(&content);
    serde_json::from_str(json).map_err(|err| LoadError::Parse(path.to_path_buf(), err))
}

/// Load records, degrading to an empty list on any failure.
///
/// A missing file means the collector has not run yet and is only reported
/// in verbose mode.
pub fn load_news(path: &Path) -> Vec<NewsRecord> {
    match read_news(path) {
        Ok(records) => {
            debug!("news"; "loaded {} from {}", plural_count(records.len(), "record"), path.display());
            records
        }
        Err(LoadError::NotFound(path)) => {
            debug!("news"; "{} not found, generating empty feed", path.display());
            Vec::new()
        }
        Err(err) => {
            log!("error"; "failed to load hot news: {err}");
            Vec::new()
        }
    }
}
