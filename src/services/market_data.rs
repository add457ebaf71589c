//! Daily close-price history from the Yahoo chart API.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::StrategyError;
use crate::models::market::PriceSeries;
use crate::signals::engine::MIN_HISTORY;

pub const DEFAULT_RANGE: &str = "2y";
const ERROR_BODY_EXCERPT: usize = 200;

/// Chart ranges ordered by coverage, with their approximate span in calendar days.
const RANGES: [(&str, u32); 4] = [("2y", 730), ("5y", 1826), ("10y", 3652), ("max", u32::MAX)];

/// Smallest provider range covering `days` calendar days, never below two years.
pub fn range_for_days(days: Option<u32>) -> &'static str {
    let Some(days) = days else {
        return DEFAULT_RANGE;
    };
    RANGES
        .iter()
        .find(|(_, span)| *span >= days)
        .map(|(range, _)| *range)
        .unwrap_or("max")
}

#[async_trait]
pub trait PriceSeriesFetcher: Send + Sync {
    /// Fetch the daily close series for an already-resolved symbol over `range`.
    ///
    /// Fails with `InsufficientHistory` when fewer than the minimum finite samples remain.
    async fn fetch(&self, symbol: &str, range: &str) -> Result<PriceSeries, StrategyError>;
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    indicators: Option<Indicators>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Option<Vec<Quote>>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    #[serde(default)]
    close: Option<Vec<Option<f64>>>,
}

impl ChartResponse {
    fn into_closes(self) -> Vec<Option<f64>> {
        self.chart
            .result
            .and_then(|results| results.into_iter().next())
            .and_then(|result| result.indicators)
            .and_then(|indicators| indicators.quote)
            .and_then(|quotes| quotes.into_iter().next())
            .and_then(|quote| quote.close)
            .unwrap_or_default()
    }
}

pub struct YahooChartProvider {
    client: reqwest::Client,
    base_url: String,
}

impl YahooChartProvider {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn chart_url(&self, symbol: &str) -> Result<url::Url, StrategyError> {
        let mut url = url::Url::parse(&self.base_url)
            .map_err(|e| StrategyError::Validation(format!("invalid price provider url: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| StrategyError::Validation("price provider url cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", symbol]);
        Ok(url)
    }
}

fn transport_error(err: reqwest::Error) -> StrategyError {
    let body = if err.is_timeout() {
        format!("timed out: {}", err)
    } else {
        err.to_string()
    };
    StrategyError::Upstream { status: None, body }
}

#[async_trait]
impl PriceSeriesFetcher for YahooChartProvider {
    async fn fetch(&self, symbol: &str, range: &str) -> Result<PriceSeries, StrategyError> {
        let url = self.chart_url(symbol)?;
        debug!(symbol = %symbol, range = %range, "Fetching price history");

        let resp = self
            .client
            .get(url)
            .query(&[("interval", "1d"), ("range", range), ("includePrePost", "false")])
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let body: String = text.chars().take(ERROR_BODY_EXCERPT).collect();
            warn!(symbol = %symbol, status = status.as_u16(), "Price provider returned an error");
            return Err(StrategyError::Upstream {
                status: Some(status.as_u16()),
                body,
            });
        }

        let chart: ChartResponse = resp
            .json()
            .await
            .map_err(|e| StrategyError::Decode(e.to_string()))?;
        let series = PriceSeries::from_raw(symbol, chart.into_closes());

        debug!(symbol = %symbol, count = series.len(), "Fetched price history");
        if series.len() < MIN_HISTORY {
            return Err(StrategyError::InsufficientHistory { got: series.len() });
        }

        Ok(series)
    }
}
