//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Expand a leading `~` to the home directory.
///
/// Relative paths are left relative: they resolve against the working
/// directory the generator is launched from.
pub fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}

/// Join `path` onto `base` with exactly one `/` between them.
///
/// ```ignore
/// join_url("https://example.com/site/", "/feed.xml") -> "https://example.com/site/feed.xml"
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_keeps_relative() {
        assert_eq!(
            expand_path(Path::new("./output/hot_news.json")),
            PathBuf::from("./output/hot_news.json")
        );
    }

    #[test]
    fn test_expand_path_tilde() {
        let expanded = expand_path(Path::new("~/feeds/rss.xml"));
        assert!(expanded.ends_with("feeds/rss.xml"));
        if std::env::var_os("HOME").is_some() {
            assert!(!expanded.starts_with("~"));
        }
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://wadmnpp.github.io/TrendRadar", "output/trendradar_rss.xml"),
            "https://wadmnpp.github.io/TrendRadar/output/trendradar_rss.xml"
        );
        assert_eq!(
            join_url("https://example.com/", "/feed.xml"),
            "https://example.com/feed.xml"
        );
        assert_eq!(join_url("https://example.com/", ""), "https://example.com");
    }
}
