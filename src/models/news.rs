use serde::{Deserialize, Serialize};

/// A publisher domain searched by the news aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsSource {
    pub domain: String,
    pub name: String,
}

impl NewsSource {
    pub fn new(domain: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            name: name.into(),
        }
    }

    /// The three mainland financial publishers searched by default.
    pub fn defaults() -> Vec<NewsSource> {
        vec![
            NewsSource::new("cls.cn", "财联社"),
            NewsSource::new("yicai.com", "第一财经"),
            NewsSource::new("eeo.com.cn", "经济观察报"),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    /// Provider-supplied timestamp, parsed only for ordering
    pub pub_date: String,
    pub source_domain: String,
}

impl NewsItem {
    /// Trimmed title used to detect duplicates across sources.
    pub fn dedup_key(&self) -> &str {
        self.title.trim()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsResult {
    pub query: String,
    /// Deduplicated total before truncation
    pub count: usize,
    pub items: Vec<NewsItem>,
}
