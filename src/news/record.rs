//! Hot news record as written by the collector.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const DEFAULT_TITLE: &str = "untitled";
pub const DEFAULT_PLATFORM: &str = "unknown";
pub const DEFAULT_HEAT: &str = "0";

/// One aggregated news entry. Every field is optional.
///
/// Fields hold text as rendered for the feed: numbers and booleans are kept
/// in their JSON spelling, while `null`, blank strings and absent keys all
/// become `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewsRecord {
    #[serde(default, deserialize_with = "text_field")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub heat: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub url: Option<String>,
}

impl NewsRecord {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn platform(&self) -> &str {
        self.platform.as_deref().unwrap_or(DEFAULT_PLATFORM)
    }

    pub fn heat(&self) -> &str {
        self.heat.as_deref().unwrap_or(DEFAULT_HEAT)
    }

    /// Summary, falling back to the (resolved) title.
    pub fn summary(&self) -> &str {
        self.summary.as_deref().unwrap_or_else(|| self.title())
    }

    /// Record url, or `fallback` when the collector did not provide one.
    pub fn link<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.url.as_deref().unwrap_or(fallback)
    }
}

fn text_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(value_to_text))
}

fn value_to_text(value: Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    };
    (!text.trim().is_empty()).then_some(text)
}
