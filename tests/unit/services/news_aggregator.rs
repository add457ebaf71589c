//! Unit tests for news aggregation with an in-memory fetcher

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use xiaofeilun::error::NewsError;
use xiaofeilun::models::news::{NewsItem, NewsSource};
use xiaofeilun::services::news::aggregator::{dedup_by_title, parse_pub_date, sort_by_recency};
use xiaofeilun::services::news::{NewsAggregator, NewsSourceFetcher, MAX_ITEMS};

/// Returns canned items per domain; domains without an entry fail.
struct StaticFetcher {
    responses: HashMap<String, Vec<NewsItem>>,
}

#[async_trait]
impl NewsSourceFetcher for StaticFetcher {
    async fn fetch_for(&self, domain: &str, _query: &str) -> Result<Vec<NewsItem>, NewsError> {
        self.responses
            .get(domain)
            .cloned()
            .ok_or_else(|| NewsError::FeedFetch {
                domain: domain.to_string(),
                reason: "connection refused".to_string(),
            })
    }
}

fn item(title: &str, pub_date: &str, domain: &str) -> NewsItem {
    NewsItem {
        title: title.to_string(),
        link: format!("https://{}/{}", domain, title.trim()),
        pub_date: pub_date.to_string(),
        source_domain: domain.to_string(),
    }
}

fn sources(domains: &[&str]) -> Vec<NewsSource> {
    domains.iter().map(|d| NewsSource::new(*d, *d)).collect()
}

fn aggregator(domains: &[&str], responses: Vec<(&str, Vec<NewsItem>)>) -> NewsAggregator {
    let fetcher = StaticFetcher {
        responses: responses
            .into_iter()
            .map(|(d, items)| (d.to_string(), items))
            .collect(),
    };
    NewsAggregator::new(sources(domains), Arc::new(fetcher))
}

#[tokio::test]
async fn test_duplicate_titles_across_sources_collapse() {
    let agg = aggregator(
        &["a.com", "b.com"],
        vec![
            ("a.com", vec![item("  Same Headline ", "Tue, 14 Oct 2025 08:00:00 GMT", "a.com")]),
            ("b.com", vec![item("Same Headline", "Tue, 14 Oct 2025 09:00:00 GMT", "b.com")]),
        ],
    );

    let result = agg.aggregate("消费").await.unwrap();
    assert_eq!(result.count, 1);
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].source_domain, "a.com", "first occurrence wins");
    assert_eq!(result.query, "消费");
}

#[tokio::test]
async fn test_truncates_to_fifteen_and_counts_before_truncation() {
    let items: Vec<NewsItem> = (0..20)
        .map(|i| item(&format!("headline {}", i), &format!("Tue, 14 Oct 2025 {:02}:00:00 GMT", i), "a.com"))
        .collect();
    let more: Vec<NewsItem> = (0..5)
        .map(|i| item(&format!("other {}", i), "Mon, 13 Oct 2025 10:00:00 GMT", "b.com"))
        .collect();
    let agg = aggregator(&["a.com", "b.com"], vec![("a.com", items), ("b.com", more)]);

    let result = agg.aggregate("q").await.unwrap();
    assert_eq!(result.count, 25);
    assert_eq!(result.items.len(), MAX_ITEMS);
    assert_eq!(result.items[0].title, "headline 19");
}

#[tokio::test]
async fn test_partial_failure_keeps_successful_sources() {
    let agg = aggregator(
        &["a.com", "down.com", "b.com"],
        vec![
            ("a.com", vec![item("one", "Tue, 14 Oct 2025 08:00:00 GMT", "a.com")]),
            ("b.com", vec![item("two", "Tue, 14 Oct 2025 09:00:00 GMT", "b.com")]),
        ],
    );

    let result = agg.aggregate("q").await.unwrap();
    assert_eq!(result.count, 2);
    assert_eq!(result.items[0].title, "two");
    assert_eq!(result.items[1].title, "one");
}

#[tokio::test]
async fn test_all_sources_failing_is_an_error() {
    let agg = aggregator(&["x.com", "y.com"], Vec::new());
    let err = agg.aggregate("q").await.unwrap_err();
    match err {
        NewsError::AllSourcesFailed(failures) => assert_eq!(failures.len(), 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_empty_source_list_yields_empty_result() {
    let agg = aggregator(&[], Vec::new());
    let result = agg.aggregate("q").await.unwrap();
    assert_eq!(result.count, 0);
    assert!(result.items.is_empty());
}

#[tokio::test]
async fn test_sources_returning_nothing_is_not_a_failure() {
    let agg = aggregator(&["a.com"], vec![("a.com", Vec::new())]);
    let result = agg.aggregate("q").await.unwrap();
    assert_eq!(result.count, 0);
}

#[test]
fn test_dedup_drops_blank_titles() {
    let items = vec![
        item("   ", "", "a.com"),
        item("", "", "a.com"),
        item("real", "", "a.com"),
        item("real ", "", "b.com"),
    ];
    let deduped = dedup_by_title(items);
    assert_eq!(deduped.len(), 1);
    assert_eq!(deduped[0].source_domain, "a.com");
}

#[test]
fn test_dedup_is_case_sensitive() {
    let deduped = dedup_by_title(vec![item("Title", "", "a.com"), item("title", "", "a.com")]);
    assert_eq!(deduped.len(), 2);
}

#[test]
fn test_sort_newest_first() {
    let mut items = vec![
        item("old", "Mon, 13 Oct 2025 08:00:00 GMT", "a.com"),
        item("new", "Wed, 15 Oct 2025 08:00:00 GMT", "a.com"),
        item("mid", "2025-10-14T08:00:00+00:00", "a.com"),
    ];
    sort_by_recency(&mut items);
    let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["new", "mid", "old"]);
}

#[test]
fn test_sort_puts_unparsable_dates_last_in_input_order() {
    let mut items = vec![
        item("bad1", "yesterday", "a.com"),
        item("good", "Tue, 14 Oct 2025 08:00:00 GMT", "a.com"),
        item("bad2", "", "a.com"),
    ];
    sort_by_recency(&mut items);
    let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["good", "bad1", "bad2"]);
}

#[test]
fn test_parse_pub_date_formats() {
    assert!(parse_pub_date("Tue, 14 Oct 2025 08:00:00 GMT").is_some());
    assert!(parse_pub_date("2025-10-14T08:00:00Z").is_some());
    assert!(parse_pub_date("not a date").is_none());
}
