//! Unit tests for error to HTTP mapping

use axum::http::StatusCode;
use xiaofeilun::error::{ApiError, LlmError, NewsError, StrategyError};

#[test]
fn test_insufficient_history_is_bad_request_with_count() {
    let api: ApiError = StrategyError::InsufficientHistory { got: 209 }.into();
    assert_eq!(api.status, StatusCode::BAD_REQUEST);
    assert_eq!(api.error, "insufficient history");
    assert_eq!(api.got, Some(209));
}

#[test]
fn test_upstream_error_keeps_status_in_details() {
    let api: ApiError = StrategyError::Upstream {
        status: Some(404),
        body: "Not Found".to_string(),
    }
    .into();
    assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(api.error, "strategy failed");
    assert_eq!(api.details.as_deref(), Some("Yahoo API 404: Not Found"));
}

#[test]
fn test_all_sources_failed_maps_to_news_fetch_failed() {
    let api: ApiError = NewsError::AllSourcesFailed(vec![NewsError::FeedFetch {
        domain: "cls.cn".to_string(),
        reason: "timeout".to_string(),
    }])
    .into();
    assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(api.error, "news fetch failed");
    assert!(api.details.unwrap().contains("cls.cn"));
}

#[test]
fn test_llm_errors() {
    let api: ApiError = LlmError::NotConfigured.into();
    assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(api.error, "DeepSeek API key not configured");
    assert!(api.details.is_none());

    let api: ApiError = LlmError::Validation("messages required (OpenAI-format array)".to_string()).into();
    assert_eq!(api.status, StatusCode::BAD_REQUEST);
}
