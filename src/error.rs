//! Error taxonomy for the strategy, news and chat pipelines, and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failures of the symbol → price history → trend signal pipeline.
#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("{0}")]
    Validation(String),

    #[error("insufficient history: got {got} samples")]
    InsufficientHistory { got: usize },

    /// Non-success or unreachable price provider. `status` is `None` for transport failures.
    #[error("{}", upstream_message(.status, .body))]
    Upstream { status: Option<u16>, body: String },

    #[error("failed to decode price history: {0}")]
    Decode(String),
}

fn upstream_message(status: &Option<u16>, body: &str) -> String {
    match status {
        Some(code) => format!("Yahoo API {}: {}", code, body),
        None => format!("Yahoo API request failed: {}", body),
    }
}

/// Failures of the news aggregation pipeline.
#[derive(Debug, Error)]
pub enum NewsError {
    #[error("{0}")]
    Validation(String),

    #[error("feed fetch failed for {domain}: {reason}")]
    FeedFetch { domain: String, reason: String },

    #[error("all news sources failed: {}", join_errors(.0))]
    AllSourcesFailed(Vec<NewsError>),
}

fn join_errors(errors: &[NewsError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Failures of the chat-completion proxy.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("DeepSeek API key not configured")]
    NotConfigured,

    #[error("{0}")]
    Validation(String),

    #[error("LLM transport error: {0}")]
    Transport(String),
}

/// Endpoint-boundary error: a status plus a stable `error` string and optional details.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Option<String>,
    pub got: Option<usize>,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            details: None,
            got: None,
        }
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    pub fn internal(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(StatusCode::INTERNAL_SERVER_ERROR, error)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({ "error": self.error });
        if let Some(details) = self.details {
            body["details"] = json!(details);
        }
        if let Some(got) = self.got {
            body["got"] = json!(got);
        }
        (self.status, Json(body)).into_response()
    }
}

impl From<StrategyError> for ApiError {
    fn from(err: StrategyError) -> Self {
        match err {
            StrategyError::Validation(msg) => ApiError::bad_request(msg),
            StrategyError::InsufficientHistory { got } => ApiError {
                got: Some(got),
                ..ApiError::bad_request("insufficient history")
            },
            other => ApiError::internal("strategy failed", other.to_string()),
        }
    }
}

impl From<NewsError> for ApiError {
    fn from(err: NewsError) -> Self {
        match err {
            NewsError::Validation(msg) => ApiError::bad_request(msg),
            other => ApiError::internal("news fetch failed", other.to_string()),
        }
    }
}

impl From<LlmError> for ApiError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::NotConfigured => {
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            LlmError::Validation(msg) => ApiError::bad_request(msg),
            LlmError::Transport(details) => ApiError::internal("LLM request failed", details),
        }
    }
}
