//! Blog preview cards built from a feed-to-JSON proxy.

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use html_escape::decode_html_entities;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const DEFAULT_FEED_PROXY: &str = "https://api.rss2json.com/v1/api.json";
pub const DEFAULT_POSTS_TO_SHOW: usize = 3;
/// Characters of plain text kept in a card excerpt.
pub const EXCERPT_CHARS: usize = 120;

pub const NO_POSTS_MESSAGE: &str = "No posts found.";

static IMG_SRC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<img\b(?:[^>]*?\s)?src\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .expect("valid img regex")
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));

/// Medium RSS feed of a user.
pub fn feed_url(username: &str) -> String {
    format!("https://medium.com/feed/@{}", username)
}

/// Public Medium profile, linked from the fallback message.
pub fn profile_url(username: &str) -> String {
    format!("https://medium.com/@{}", username)
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedResponse {
    pub status: String,
    #[serde(default)]
    pub items: Vec<FeedItem>,
}

/// One entry of the proxied feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(rename = "pubDate", default)]
    pub pub_date: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

impl FeedItem {
    /// Articles carry tags; comments and responses in the feed do not.
    pub fn is_categorized(&self) -> bool {
        self.categories.as_ref().is_some_and(|c| !c.is_empty())
    }
}

/// Client for the feed proxy.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: reqwest::Client,
    proxy_url: String,
    feed_url: String,
}

impl FeedClient {
    pub fn new(proxy_url: impl Into<String>, username: &str) -> Self {
        Self::with_client(reqwest::Client::new(), proxy_url, username)
    }

    pub fn with_client(client: reqwest::Client, proxy_url: impl Into<String>, username: &str) -> Self {
        Self {
            client,
            proxy_url: proxy_url.into(),
            feed_url: feed_url(username),
        }
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    /// Fetch the feed once. No retries, no caching.
    pub async fn fetch(&self) -> Result<Vec<FeedItem>> {
        let response = self
            .client
            .get(&self.proxy_url)
            .query(&[("rss_url", self.feed_url.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let payload: FeedResponse = response.json().await?;
        if payload.status != "ok" {
            return Err(Error::FeedStatus(payload.status));
        }

        log::debug!("Fetched {} feed items from {}", payload.items.len(), self.feed_url);
        Ok(payload.items)
    }
}

/// A rendered blog preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub title: String,
    pub link: String,
    pub image: Option<String>,
    pub date: String,
    pub excerpt: String,
}

impl PostCard {
    pub fn from_item(item: &FeedItem) -> Self {
        Self {
            title: item.title.clone(),
            link: item.link.clone(),
            image: first_image_src(&item.content),
            date: format_pub_date(&item.pub_date),
            excerpt: excerpt(&item.content),
        }
    }
}

/// What the blog section shows once the fetch settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedView {
    Cards(Vec<PostCard>),
    Fallback { message: String },
}

impl FeedView {
    pub fn from_items(items: &[FeedItem], limit: usize) -> Self {
        let cards: Vec<PostCard> = items
            .iter()
            .filter(|item| item.is_categorized())
            .take(limit)
            .map(PostCard::from_item)
            .collect();

        if cards.is_empty() {
            FeedView::Fallback {
                message: NO_POSTS_MESSAGE.to_string(),
            }
        } else {
            FeedView::Cards(cards)
        }
    }

    pub fn from_result(result: Result<Vec<FeedItem>>, limit: usize) -> Self {
        match result {
            Ok(items) => Self::from_items(&items, limit),
            Err(err) => FeedView::Fallback {
                message: fallback_message(&err).to_string(),
            },
        }
    }
}

/// Text shown above the profile link when the feed can't be displayed.
pub fn fallback_message(err: &Error) -> &'static str {
    match err {
        Error::Status(_) => "Network response was not ok",
        Error::FeedStatus(_) => "Failed to get RSS feed",
        Error::Network(_) => "Failed to load blog posts.",
    }
}

/// `src` of the first `<img>` in an HTML fragment.
pub fn first_image_src(html: &str) -> Option<String> {
    let captures = IMG_SRC_RE.captures(html)?;
    captures
        .get(1)
        .or_else(|| captures.get(2))
        .or_else(|| captures.get(3))
        .map(|m| decode_html_entities(m.as_str()).into_owned())
        .filter(|src| !src.is_empty())
}

/// Plain text of an HTML fragment: tags removed, entities decoded.
pub fn strip_html(html: &str) -> String {
    let text = TAG_RE.replace_all(html, "");
    decode_html_entities(&text).into_owned()
}

/// First 120 characters of the plain text, followed by an ellipsis.
pub fn excerpt(html: &str) -> String {
    let text: String = strip_html(html).chars().take(EXCERPT_CHARS).collect();
    format!("{}...", text)
}

/// Format a publish timestamp as `January 5, 2024`.
///
/// Accepts RFC 3339, RFC 2822 and the `YYYY-MM-DD HH:MM:SS` form the proxy
/// emits. Anything else is returned unchanged.
pub fn format_pub_date(raw: &str) -> String {
    parse_pub_date(raw)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_pub_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.date_naive());
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(raw) {
        return Some(date.date_naive());
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(date.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, content: &str, categories: &[&str]) -> FeedItem {
        FeedItem {
            title: title.to_string(),
            link: format!("https://medium.com/p/{}", title),
            pub_date: "2024-01-05 00:00:00".to_string(),
            content: content.to_string(),
            categories: Some(categories.iter().map(|c| c.to_string()).collect()),
        }
    }

    #[test]
    fn test_first_image_src_quoting_styles() {
        assert_eq!(first_image_src("<img src='x.jpg'>").as_deref(), Some("x.jpg"));
        assert_eq!(
            first_image_src(r#"<p>hi</p><IMG alt="a" src="https://cdn/a.png" />"#).as_deref(),
            Some("https://cdn/a.png")
        );
        assert_eq!(first_image_src("<img src=b.gif>").as_deref(), Some("b.gif"));
    }

    #[test]
    fn test_first_image_src_picks_first_and_ignores_data_src() {
        let html = r#"<img data-src="lazy.jpg" src="real.jpg"><img src="second.jpg">"#;
        assert_eq!(first_image_src(html).as_deref(), Some("real.jpg"));
    }

    #[test]
    fn test_first_image_src_decodes_entities() {
        let html = r#"<img src="https://cdn/x.png?a=1&amp;b=2">"#;
        assert_eq!(first_image_src(html).as_deref(), Some("https://cdn/x.png?a=1&b=2"));
    }

    #[test]
    fn test_first_image_src_none() {
        assert_eq!(first_image_src("<p>no pictures</p>"), None);
        assert_eq!(first_image_src("<img alt='empty' src=''>"), None);
    }

    #[test]
    fn test_excerpt_strips_tags_and_truncates() {
        let html = format!("<h3>Title</h3><p>{}</p>", "x".repeat(200));
        let text = excerpt(&html);
        assert!(text.starts_with("Titlexxx"));
        assert!(text.ends_with("..."));
        assert_eq!(text.chars().count(), EXCERPT_CHARS + 3);
    }

    #[test]
    fn test_excerpt_decodes_entities() {
        assert_eq!(
            excerpt("<p>Tom &amp; Jerry don&#8217;t &lt;3 bugs</p>"),
            "Tom & Jerry don\u{2019}t <3 bugs..."
        );
    }

    #[test]
    fn test_decoded_brackets_are_not_stripped_as_tags() {
        assert_eq!(strip_html("<p>&lt;div&gt; is a tag</p>"), "<div> is a tag");
    }

    #[test]
    fn test_excerpt_of_short_text() {
        assert_eq!(excerpt("<p>short</p>"), "short...");
    }

    #[test]
    fn test_format_pub_date_variants() {
        assert_eq!(format_pub_date("2024-01-05T00:00:00Z"), "January 5, 2024");
        assert_eq!(format_pub_date("2023-11-20 14:03:11"), "November 20, 2023");
        assert_eq!(format_pub_date("Tue, 02 Jul 2024 10:00:00 GMT"), "July 2, 2024");
        assert_eq!(format_pub_date("someday"), "someday");
    }

    #[test]
    fn test_view_takes_first_three_categorized() {
        let items = vec![
            item("A", "<img src='x.jpg'>body text...", &["tech"]),
            item("comment", "<p>nice post</p>", &[]),
            item("B", "<p>b</p>", &["rust"]),
            item("C", "<p>c</p>", &["rust"]),
            item("D", "<p>d</p>", &["rust"]),
        ];
        let FeedView::Cards(cards) = FeedView::from_items(&items, DEFAULT_POSTS_TO_SHOW) else {
            panic!("expected cards");
        };
        let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        assert_eq!(cards[0].image.as_deref(), Some("x.jpg"));
        assert_eq!(cards[1].image, None);
        assert_eq!(cards[0].date, "January 5, 2024");
        assert_eq!(cards[0].excerpt, "body text......");
    }

    #[test]
    fn test_view_without_categorized_items_falls_back() {
        let mut uncategorized = item("A", "", &[]);
        uncategorized.categories = None;
        let view = FeedView::from_items(&[uncategorized, item("B", "", &[])], 3);
        assert_eq!(
            view,
            FeedView::Fallback {
                message: NO_POSTS_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_view_from_errors() {
        let view = FeedView::from_result(Err(Error::FeedStatus("error".to_string())), 3);
        assert_eq!(
            view,
            FeedView::Fallback {
                message: "Failed to get RSS feed".to_string()
            }
        );
        let view = FeedView::from_result(Err(Error::Status(503)), 3);
        assert_eq!(
            view,
            FeedView::Fallback {
                message: "Network response was not ok".to_string()
            }
        );
    }

    #[test]
    fn test_payload_parsing_tolerates_missing_fields() {
        let payload: FeedResponse = serde_json::from_str(
            r#"{"status":"ok","feed":{},"items":[{"title":"T","categories":null,"thumbnail":""}]}"#,
        )
        .unwrap();
        assert_eq!(payload.items.len(), 1);
        assert!(!payload.items[0].is_categorized());
    }

    #[test]
    fn test_urls() {
        assert_eq!(feed_url("jane"), "https://medium.com/feed/@jane");
        assert_eq!(profile_url("jane"), "https://medium.com/@jane");
    }
}
