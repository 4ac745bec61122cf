//! Generator configuration (`trendradar.toml`).
//!
//! # Sections
//!
//! | Section    | Purpose                                          |
//! |------------|--------------------------------------------------|
//! | `[feed]`   | Channel metadata (title, description, link, ...) |
//! | `[paths]`  | Input data file, output RSS file, public path    |
//!
//! The file is optional. Without it every value falls back to the built-in
//! defaults, so a bare invocation regenerates the TrendRadar feed.

mod error;
mod section;
mod util;

pub use error::ConfigError;
pub use section::{FeedMetadata, PathsConfig};

use crate::{cli::Cli, debug, log};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use util::{expand_path, join_url};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "trendradar.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration, passed explicitly into the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Channel metadata
    pub feed: FeedMetadata,

    /// Input/output locations
    pub paths: PathsConfig,
}

impl FeedConfig {
    /// Load configuration from CLI arguments.
    ///
    /// An explicit `--config` must exist; the default file is optional.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.clone()).into()),
            Some(path) => Self::from_path(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG);
                if default.exists() {
                    Self::from_path(default)?
                } else {
                    debug!("config"; "no {} found, using defaults", DEFAULT_CONFIG);
                    Self::default()
                }
            }
        };

        config.apply_cli(cli);
        config.normalize_paths();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .map_err(|err| ConfigError::Toml(path.to_path_buf(), err))?;

        if !ignored.is_empty() {
            log!("warning"; "unknown fields in {}, ignoring: {}", path.display(), ignored.join(", "));
        }

        debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), toml::de::Error> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Apply `--input` / `--output` overrides.
    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(input) = &cli.input {
            self.paths.input = input.clone();
        }
        if let Some(output) = &cli.output {
            self.paths.output = output.clone();
        }
    }

    fn normalize_paths(&mut self) {
        self.paths.input = expand_path(&self.paths.input);
        self.paths.output = expand_path(&self.paths.output);
    }

    /// Validate all sections, reporting every problem at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();
        self.feed.validate(&mut errors);
        self.paths.validate(&mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("; ")))
        }
    }

    /// Public URL the generated file is served from.
    pub fn public_url(&self) -> String {
        join_url(&self.feed.link, &self.paths.public)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> FeedConfig {
    let (parsed, ignored) = FeedConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn cli_with_config(path: PathBuf) -> Cli {
        Cli {
            config: Some(path),
            ..Cli::default()
        }
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(test_parse_config(""), FeedConfig::default());
    }

    #[test]
    fn test_custom_config() {
        let config = test_parse_config(
            "[feed]\ntitle = \"Hot\"\nlink = \"https://example.com/hot\"\n\n\
             [paths]\ninput = \"data/news.json\"\noutput = \"public/rss.xml\"\npublic = \"rss.xml\"",
        );
        assert_eq!(config.feed.title, "Hot");
        assert_eq!(config.feed.language, "zh-CN");
        assert_eq!(config.paths.input, PathBuf::from("data/news.json"));
        assert_eq!(config.paths.output, PathBuf::from("public/rss.xml"));
        assert_eq!(config.public_url(), "https://example.com/hot/rss.xml");
    }

    #[test]
    fn test_unknown_fields_collected() {
        let (config, ignored) =
            FeedConfig::parse_with_ignored("[feed]\ntitel = \"typo\"\n[extra]\nkey = 1").unwrap();
        assert_eq!(config.feed, FeedMetadata::default());
        assert_eq!(ignored, vec!["feed.titel", "extra"]);
    }

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(FeedConfig::parse_with_ignored("[feed\ntitle = \"x\"").is_err());
    }

    #[test]
    fn test_default_public_url() {
        assert_eq!(
            FeedConfig::default().public_url(),
            "https://wadmnpp.github.io/TrendRadar/output/trendradar_rss.xml"
        );
    }

    #[test]
    fn test_load_missing_explicit_config() {
        let dir = TempDir::new().unwrap();
        let err = FeedConfig::load(&cli_with_config(dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_load_applies_cli_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trendradar.toml");
        fs::write(&path, "[paths]\ninput = \"in.json\"\noutput = \"out.xml\"").unwrap();

        let cli = Cli {
            output: Some(PathBuf::from("override.xml")),
            ..cli_with_config(path)
        };
        let config = FeedConfig::load(&cli).unwrap();
        assert_eq!(config.paths.input, PathBuf::from("in.json"));
        assert_eq!(config.paths.output, PathBuf::from("override.xml"));
    }

    #[test]
    fn test_load_rejects_invalid_link() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trendradar.toml");
        fs::write(&path, "[feed]\nlink = \"not a url\"\ntitle = \"\"").unwrap();

        let err = FeedConfig::load(&cli_with_config(path)).unwrap_err();
        let Some(ConfigError::Validation(message)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected validation error, got {err:?}");
        };
        assert!(message.contains("feed.title"));
        assert!(message.contains("feed.link"));
    }

    #[test]
    fn test_load_reports_parse_error_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[feed\n").unwrap();

        let err = FeedConfig::load(&cli_with_config(path)).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }
}
