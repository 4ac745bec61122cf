//! RSS 2.0 channel assembly.
//!
//! Turns the loaded hot news records into an `rss::Channel`. One timestamp
//! is taken per run and shared by the channel dates and every item.

use crate::{
    config::FeedMetadata,
    news::NewsRecord,
    utils::date::{DateTimeUtc, unique_stamp},
};
use rss::{Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder};
use std::collections::BTreeMap;

/// Maximum number of items in the feed; later records are dropped.
pub const MAX_ITEMS: usize = 20;

/// Declared on the root element for reader compatibility.
pub const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";

/// Build the channel for `records` at instant `now`.
pub fn build_channel(meta: &FeedMetadata, records: &[NewsRecord], now: DateTimeUtc) -> Channel {
    let pub_date = now.to_rfc2822();

    let items: Vec<_> = records
        .iter()
        .take(MAX_ITEMS)
        .map(|record| record_to_item(record, meta, &pub_date))
        .collect();

    ChannelBuilder::default()
        .namespaces(BTreeMap::from([(
            "atom".to_string(),
            ATOM_NAMESPACE.to_string(),
        )]))
        .title(&meta.title)
        .description(&meta.description)
        .link(&meta.link)
        .language(meta.language.clone())
        .pub_date(pub_date.clone())
        .last_build_date(pub_date)
        .generator(meta.generator.clone())
        .items(items)
        .build()
}

fn record_to_item(record: &NewsRecord, meta: &FeedMetadata, pub_date: &str) -> Item {
    let link = record.link(&meta.link);

    // Synthetic token: differs per item and per run, never a permalink.
    let guid = GuidBuilder::default()
        .permalink(false)
        .value(format!("{link}-{}", unique_stamp()))
        .build();

    ItemBuilder::default()
        .title(record.title().to_string())
        .description(describe(record))
        .link(link.to_string())
        .guid(guid)
        .pub_date(pub_date.to_string())
        .build()
}

/// `【platform】热度：heat`, a blank line, then the summary.
fn describe(record: &NewsRecord) -> String {
    format!(
        "【{}】热度：{}\n\n{}",
        record.platform(),
        record.heat(),
        record.summary()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: DateTimeUtc = DateTimeUtc::new(2024, 10, 2, 10, 15, 0);

    fn records(json: &str) -> Vec<NewsRecord> {
        serde_json::from_str(json).unwrap()
    }

    fn numbered(count: usize) -> Vec<NewsRecord> {
        (0..count)
            .map(|i| NewsRecord {
                title: Some(format!("news {i}")),
                ..NewsRecord::default()
            })
            .collect()
    }

    #[test]
    fn test_channel_metadata() {
        let meta = FeedMetadata::default();
        let channel = build_channel(&meta, &[], NOW);

        assert_eq!(channel.title(), meta.title);
        assert_eq!(channel.description(), meta.description);
        assert_eq!(channel.link(), meta.link);
        assert_eq!(channel.language(), Some("zh-CN"));
        assert_eq!(channel.generator(), Some("TrendRadar RSS Generator"));
        assert_eq!(channel.pub_date(), Some("Wed, 02 Oct 2024 10:15:00 GMT"));
        assert_eq!(channel.last_build_date(), channel.pub_date());
        assert_eq!(
            channel.namespaces().get("atom").map(String::as_str),
            Some(ATOM_NAMESPACE)
        );
        assert!(channel.items().is_empty());
    }

    #[test]
    fn test_items_capped() {
        let meta = FeedMetadata::default();
        for (count, expected) in [(0, 0), (1, 1), (20, 20), (21, 20), (57, 20)] {
            let channel = build_channel(&meta, &numbered(count), NOW);
            assert_eq!(channel.items().len(), expected, "input of {count}");
        }
    }

    #[test]
    fn test_truncation_keeps_first_records() {
        let channel = build_channel(&FeedMetadata::default(), &numbered(30), NOW);
        let titles: Vec<_> = channel.items().iter().filter_map(Item::title).collect();
        assert_eq!(titles.first(), Some(&"news 0"));
        assert_eq!(titles.last(), Some(&"news 19"));
    }

    #[test]
    fn test_description_template() {
        let record = records(r#"[{"title":"X","platform":"P","heat":5,"url":"http://e.x"}]"#);
        let channel = build_channel(&FeedMetadata::default(), &record, NOW);
        let item = &channel.items()[0];

        assert_eq!(item.description(), Some("【P】热度：5\n\nX"));
        assert_eq!(item.link(), Some("http://e.x"));
        assert!(item.guid().unwrap().value().starts_with("http://e.x-"));
    }

    #[test]
    fn test_defaults_for_empty_record() {
        let meta = FeedMetadata::default();
        let channel = build_channel(&meta, &records("[{}]"), NOW);
        let item = &channel.items()[0];

        assert_eq!(item.title(), Some("untitled"));
        assert_eq!(item.description(), Some("【unknown】热度：0\n\nuntitled"));
        assert_eq!(item.link(), Some(meta.link.as_str()));
    }

    #[test]
    fn test_missing_url_falls_back_to_feed_link() {
        let meta = FeedMetadata {
            link: "https://example.com/hot".into(),
            ..FeedMetadata::default()
        };
        let channel = build_channel(&meta, &records(r#"[{"title":"X"}]"#), NOW);
        let item = &channel.items()[0];
        let guid = item.guid().unwrap();

        assert_eq!(item.link(), Some("https://example.com/hot"));
        let (link, stamp) = guid.value().rsplit_once('-').unwrap();
        assert_eq!(link, "https://example.com/hot");
        assert!(stamp.contains('.'));
        assert!(!guid.is_permalink());
    }

    #[test]
    fn test_empty_summary_uses_title() {
        let channel = build_channel(
            &FeedMetadata::default(),
            &records(r#"[{"title":"标题","platform":"微博","heat":"99","summary":""}]"#),
            NOW,
        );
        let description = channel.items()[0].description().unwrap();
        assert_eq!(description, "【微博】热度：99\n\n标题");
        assert!(description.ends_with("标题"));
    }

    #[test]
    fn test_items_share_channel_pub_date() {
        let channel = build_channel(&FeedMetadata::default(), &numbered(5), NOW);
        for item in channel.items() {
            assert_eq!(item.pub_date(), channel.pub_date());
        }
    }

    #[test]
    fn test_same_link_gets_distinct_guids() {
        let channel = build_channel(
            &FeedMetadata::default(),
            &records(r#"[{"url":"http://e.x"},{"url":"http://e.x"},{"url":"http://e.x"}]"#),
            NOW,
        );
        let guids: Vec<_> = channel
            .items()
            .iter()
            .map(|item| item.guid().unwrap().value().to_string())
            .collect();
        assert_ne!(guids[0], guids[1]);
        assert_ne!(guids[1], guids[2]);
        assert_ne!(guids[0], guids[2]);
    }
}
