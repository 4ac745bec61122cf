//! `[feed]` and `[paths]` configuration sections.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// [feed]
// ============================================================================

/// Channel-level metadata, fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedMetadata {
    /// Channel title.
    pub title: String,

    /// Channel description.
    pub description: String,

    /// Canonical link; also the fallback link for records without a url.
    pub link: String,

    /// Language tag (e.g., "zh-CN").
    pub language: String,

    /// Value of the `<generator>` element.
    pub generator: String,
}

impl Default for FeedMetadata {
    fn default() -> Self {
        Self {
            title: "TrendRadar 热点聚合".into(),
            description: "TrendRadar抓取的全网热点资讯聚合（支持微博、今日头条等平台）".into(),
            link: "https://wadmnpp.github.io/TrendRadar".into(),
            language: "zh-CN".into(),
            generator: "TrendRadar RSS Generator".into(),
        }
    }
}

impl FeedMetadata {
    /// Collect validation errors for this section.
    ///
    /// # Checks
    /// - `title` must not be empty
    /// - `link` must be an absolute `http`/`https` URL
    pub fn validate(&self, errors: &mut Vec<String>) {
        if self.title.trim().is_empty() {
            errors.push("feed.title must not be empty".into());
        }

        match url::Url::parse(&self.link) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(format!(
                "feed.link must use http or https, got `{}`",
                url.scheme()
            )),
            Err(err) => errors.push(format!("feed.link `{}` is not a valid URL: {err}", self.link)),
        }
    }
}

// ============================================================================
// [paths]
// ============================================================================

/// Input/output locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Hot news JSON produced by the collector.
    pub input: PathBuf,

    /// Generated RSS file.
    pub output: PathBuf,

    /// Path of the RSS file under `feed.link`, used for the public URL.
    pub public: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: "./output/hot_news.json".into(),
            output: "./output/trendradar_rss.xml".into(),
            public: "output/trendradar_rss.xml".into(),
        }
    }
}

impl PathsConfig {
    pub fn validate(&self, errors: &mut Vec<String>) {
        if self.output.as_os_str().is_empty() {
            errors.push("paths.output must not be empty".into());
        }
    }
}
