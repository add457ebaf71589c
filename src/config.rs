//! Environment-driven configuration

use std::env;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com";
pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_NEWS_BASE_URL: &str = "https://news.google.com";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 Xiaofeilun";

/// Get the deployment environment label (`APP_ENV`, then `ENVIRONMENT`).
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .or_else(|_| env::var("ENVIRONMENT"))
        .map(|e| e.trim().to_lowercase())
        .ok()
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| "sandbox".to_string())
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub deepseek_api_key: Option<String>,
    pub deepseek_base_url: String,
    pub yahoo_base_url: String,
    pub news_base_url: String,
    pub upstream_timeout: Duration,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            deepseek_api_key: None,
            deepseek_base_url: DEFAULT_DEEPSEEK_BASE_URL.to_string(),
            yahoo_base_url: DEFAULT_YAHOO_BASE_URL.to_string(),
            news_base_url: DEFAULT_NEWS_BASE_URL.to_string(),
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl AppConfig {
    /// Build configuration from process environment variables.
    ///
    /// Missing or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            host: non_empty("HOST").unwrap_or(defaults.host),
            port: non_empty("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            deepseek_api_key: non_empty("DEEPSEEK_API_KEY"),
            deepseek_base_url: non_empty("DEEPSEEK_BASE_URL").unwrap_or(defaults.deepseek_base_url),
            yahoo_base_url: non_empty("YAHOO_BASE_URL").unwrap_or(defaults.yahoo_base_url),
            news_base_url: non_empty("NEWS_BASE_URL").unwrap_or(defaults.news_base_url),
            upstream_timeout: non_empty("UPSTREAM_TIMEOUT_SECS")
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|s| *s > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.upstream_timeout),
            user_agent: non_empty("USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }

    /// Shared HTTP client for all upstream calls, with the per-request timeout applied.
    pub fn http_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .timeout(self.upstream_timeout)
            .user_agent(self.user_agent.clone())
            .build()
    }
}
