//! Site-restricted news search over the Google News RSS feed.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::NewsError;
use crate::models::news::NewsItem;

#[async_trait]
pub trait NewsSourceFetcher: Send + Sync {
    /// Search one publisher domain for `query`, returning zero or more items.
    async fn fetch_for(&self, domain: &str, query: &str) -> Result<Vec<NewsItem>, NewsError>;
}

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(rename = "pubDate", default)]
    pub_date: Option<String>,
}

/// Parse an RSS 2.0 document into items labelled with `domain`.
///
/// A channel with no `<item>` yields an empty list; missing fields become empty strings.
pub fn parse_feed(xml: &str, domain: &str) -> Result<Vec<NewsItem>, NewsError> {
    let rss: Rss = quick_xml::de::from_str(xml).map_err(|e| NewsError::FeedFetch {
        domain: domain.to_string(),
        reason: format!("invalid feed: {}", e),
    })?;

    Ok(rss
        .channel
        .items
        .into_iter()
        .map(|item| NewsItem {
            title: item.title.unwrap_or_default(),
            link: item.link.unwrap_or_default(),
            pub_date: item.pub_date.unwrap_or_default(),
            source_domain: domain.to_string(),
        })
        .collect())
}

pub struct GoogleNewsRssFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleNewsRssFetcher {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn search_url(&self, domain: &str, query: &str) -> Result<url::Url, NewsError> {
        let mut url = url::Url::parse(&format!("{}/rss/search", self.base_url)).map_err(|e| {
            NewsError::FeedFetch {
                domain: domain.to_string(),
                reason: format!("invalid feed url: {}", e),
            }
        })?;
        url.query_pairs_mut()
            .append_pair("q", &format!("site:{} {}", domain, query))
            .append_pair("hl", "zh-CN")
            .append_pair("gl", "CN")
            .append_pair("ceid", "CN:zh-Hans");
        Ok(url)
    }
}

#[async_trait]
impl NewsSourceFetcher for GoogleNewsRssFetcher {
    async fn fetch_for(&self, domain: &str, query: &str) -> Result<Vec<NewsItem>, NewsError> {
        let url = self.search_url(domain, query)?;
        let fetch_error = |reason: String| NewsError::FeedFetch {
            domain: domain.to_string(),
            reason,
        };

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(fetch_error(format!("feed returned HTTP {}", status.as_u16())));
        }

        let xml = resp.text().await.map_err(|e| fetch_error(e.to_string()))?;
        let items = parse_feed(&xml, domain)?;
        debug!(domain = %domain, count = items.len(), "Fetched news feed");
        Ok(items)
    }
}
