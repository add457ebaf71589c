//! HTTP endpoint server using Axum

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::config::AppConfig;
use crate::error::{ApiError, LlmError, StrategyError};
use crate::intent::IntentClassifier;
use crate::metrics::Metrics;
use crate::models::news::NewsSource;
use crate::models::signal::TrendSignal;
use crate::services::llm::{ChatRequest, LlmClient};
use crate::services::market_data::{range_for_days, PriceSeriesFetcher, YahooChartProvider};
use crate::services::news::{GoogleNewsRssFetcher, NewsAggregator};
use crate::services::symbol;
use crate::signals::engine::TrendSignalEngine;

pub const SERVICE_NAME: &str = "xiaofeilun";
const BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub prices: Arc<dyn PriceSeriesFetcher>,
    pub news: Arc<NewsAggregator>,
    pub llm: Arc<LlmClient>,
    pub classifier: Arc<IntentClassifier>,
}

impl AppState {
    /// Wire the production collaborators from configuration.
    pub fn from_config(config: &AppConfig, metrics: Arc<Metrics>) -> Result<Self, reqwest::Error> {
        let client = config.http_client()?;
        let fetcher = Arc::new(GoogleNewsRssFetcher::new(client.clone(), &config.news_base_url));

        Ok(Self {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics,
            start_time: Arc::new(Instant::now()),
            prices: Arc::new(YahooChartProvider::new(client.clone(), &config.yahoo_base_url)),
            news: Arc::new(NewsAggregator::new(NewsSource::defaults(), fetcher)),
            llm: Arc::new(LlmClient::new(
                client,
                &config.deepseek_base_url,
                config.deepseek_api_key.clone(),
            )),
            classifier: Arc::new(IntentClassifier::default()),
        })
    }
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": SERVICE_NAME
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
struct StrategyQuery {
    symbol: Option<String>,
    /// Lookback in calendar days; widens the provider range, never narrows it below two years
    days: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewsQuery {
    q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct IntentRequest {
    #[serde(default)]
    text: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Resolve the symbol, fetch its history and evaluate the trend rule
async fn strategy(
    State(state): State<AppState>,
    Query(params): Query<StrategyQuery>,
) -> Result<Json<TrendSignal>, ApiError> {
    let raw = non_empty(params.symbol).ok_or_else(|| {
        StrategyError::Validation("symbol required (e.g., 600519 or 600519.SS)".to_string())
    })?;
    let symbol = symbol::resolve(&raw);
    let days = params.days.and_then(|d| d.trim().parse::<u32>().ok());
    let range = range_for_days(days);

    let series = state.prices.fetch(&symbol, range).await.map_err(|e| {
        match &e {
            StrategyError::InsufficientHistory { got } => {
                warn!(symbol = %symbol, got = *got, "Insufficient price history");
            }
            _ => {
                state.metrics.record_upstream_failure("price");
                error!(symbol = %symbol, error = %e, "Strategy fetch failed");
            }
        }
        e
    })?;

    let signal = TrendSignalEngine::evaluate(&series)?;
    info!(
        symbol = %signal.symbol,
        recommendation = %signal.recommendation,
        current_price = signal.current_price,
        "Strategy evaluated"
    );
    Ok(Json(signal))
}

/// Aggregate news across the configured publisher domains
async fn news(
    State(state): State<AppState>,
    Query(params): Query<NewsQuery>,
) -> Result<Response, ApiError> {
    let Some(query) = non_empty(params.q) else {
        return Err(ApiError::bad_request("q required"));
    };

    match state.news.aggregate(&query).await {
        Ok(result) => Ok(Json(result).into_response()),
        Err(e) => {
            state.metrics.record_upstream_failure("news");
            error!(query = %query, error = %e, "News aggregation failed");
            Err(e.into())
        }
    }
}

/// Forward a chat completion, passing the upstream status through
async fn llm(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let request: ChatRequest = serde_json::from_slice(&body).unwrap_or_default();

    let (status, data) = state.llm.chat(request).await.map_err(|e| {
        if matches!(e, LlmError::Transport(_)) {
            state.metrics.record_upstream_failure("llm");
        }
        error!(error = %e, "LLM request failed");
        ApiError::from(e)
    })?;

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
    Ok((status, Json(data)).into_response())
}

/// Classify chat text into news, buy or chat intent
async fn intent(State(state): State<AppState>, body: Bytes) -> Result<Json<Value>, ApiError> {
    let request: IntentRequest = serde_json::from_slice(&body).unwrap_or_default();
    let text = non_empty(request.text).ok_or_else(|| ApiError::bad_request("text required"))?;

    let intent = state.classifier.classify(&text);
    Ok(Json(json!(intent)))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/strategy", get(strategy))
        .route("/api/news", get(news))
        .route("/api/llm", post(llm))
        .route("/api/intent", post(intent))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES)),
        )
        .with_state(state)
}

pub async fn start_server(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let state = AppState::from_config(&config, metrics)?;
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(address = %addr, "HTTP server listening on {}", addr);
    info!("Metrics endpoint available at http://{}/metrics", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
