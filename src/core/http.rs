//! HTTP endpoint server using Axum

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::config::Config;
use crate::error::LoadError;
use crate::io::{load_rule_set, load_signals};
use crate::metrics::Metrics;
use crate::models::{RuleSet, SignalDetails};
use crate::rules::SignalEvaluator;
use crate::signals::SignalEngine;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, metrics: Arc<Metrics>) -> Self {
        Self {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics,
            start_time: Arc::new(Instant::now()),
            config: Arc::new(config),
        }
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

/// Body of `POST /api/signals/evaluate`.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluateRequest {
    pub rules: RuleSet,
    #[serde(default)]
    pub signals: Vec<SignalDetails>,
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "junkfilter"
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

fn evaluate_batch(state: &AppState, rules: &RuleSet, signals: &[SignalDetails]) -> Vec<SignalDetails> {
    let result = SignalEngine::evaluate(&SignalEvaluator::at_current_time(), rules, signals);
    state.metrics.record_batch(&result.summary);
    result.junk
}

/// Evaluate the configured rule file against the configured signal file
async fn list_junk_signals(
    State(state): State<AppState>,
) -> Result<Json<Vec<SignalDetails>>, StatusCode> {
    let config = state.config.clone();
    let loaded = tokio::task::spawn_blocking(move || -> Result<_, LoadError> {
        let rule_set = load_rule_set(&config.rule_set_path)?;
        let signals = load_signals(&config.signals_path)?;
        Ok((rule_set, signals))
    })
    .await
    .map_err(|e| {
        error!(error = %e, "Input loading task failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let (rule_set, signals) = loaded.map_err(|e| {
        error!(error = %e, "Failed to load evaluation inputs");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(evaluate_batch(&state, &rule_set, &signals)))
}

/// Evaluate a caller-supplied rule set and signal batch
async fn evaluate_signals(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Json<Vec<SignalDetails>> {
    Json(evaluate_batch(&state, &request.rules, &request.signals))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/values", get(list_junk_signals))
        .route("/api/signals/evaluate", post(evaluate_signals))
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
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(config: Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let port = config.port;
    let metrics = Arc::new(Metrics::new()?);
    let state = AppState::new(config, metrics);
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
