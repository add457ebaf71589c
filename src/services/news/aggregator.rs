//! Multi-source news aggregation: concurrent fan-out, title dedup, recency sort, truncation.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use futures_util::future::join_all;
use tracing::{info, warn};

use crate::error::NewsError;
use crate::models::news::{NewsItem, NewsResult, NewsSource};
use crate::services::news::feed::NewsSourceFetcher;

pub const MAX_ITEMS: usize = 15;

pub struct NewsAggregator {
    sources: Vec<NewsSource>,
    fetcher: Arc<dyn NewsSourceFetcher>,
}

impl NewsAggregator {
    pub fn new(sources: Vec<NewsSource>, fetcher: Arc<dyn NewsSourceFetcher>) -> Self {
        Self { sources, fetcher }
    }

    pub fn sources(&self) -> &[NewsSource] {
        &self.sources
    }

    /// Fetch every source concurrently and merge the results.
    ///
    /// A failing source is logged and skipped. The call only fails when every
    /// configured source failed.
    pub async fn aggregate(&self, query: &str) -> Result<NewsResult, NewsError> {
        let tasks = self.sources.iter().map(|source| {
            let fetcher = self.fetcher.clone();
            async move { (source, fetcher.fetch_for(&source.domain, query).await) }
        });
        let results = join_all(tasks).await;

        let mut merged: Vec<NewsItem> = Vec::new();
        let mut failures: Vec<NewsError> = Vec::new();
        for (source, result) in results {
            match result {
                Ok(items) => merged.extend(items),
                Err(e) => {
                    warn!(domain = %source.domain, error = %e, "News source failed");
                    failures.push(e);
                }
            }
        }

        if !self.sources.is_empty() && failures.len() == self.sources.len() {
            return Err(NewsError::AllSourcesFailed(failures));
        }

        let mut items = dedup_by_title(merged);
        sort_by_recency(&mut items);
        let count = items.len();
        items.truncate(MAX_ITEMS);

        info!(
            query = %query,
            count = count,
            failed_sources = failures.len(),
            "Aggregated news"
        );

        Ok(NewsResult {
            query: query.to_string(),
            count,
            items,
        })
    }
}

/// Keep the first item per trimmed title, dropping blank titles.
pub fn dedup_by_title(items: Vec<NewsItem>) -> Vec<NewsItem> {
    let mut seen: HashSet<String> = HashSet::new();
    items
        .into_iter()
        .filter(|item| {
            let key = item.dedup_key();
            !key.is_empty() && seen.insert(key.to_string())
        })
        .collect()
}

/// Parse a feed timestamp (RFC 2822, falling back to RFC 3339).
pub fn parse_pub_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
}

/// Stable sort, newest first; unparsable timestamps go last in their original order.
pub fn sort_by_recency(items: &mut [NewsItem]) {
    items.sort_by_cached_key(|item| std::cmp::Reverse(parse_pub_date(&item.pub_date)));
}
