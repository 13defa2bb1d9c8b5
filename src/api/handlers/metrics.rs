//! Prometheus metrics handler
//!
//! Exposes `GET /metrics` returning the Prometheus text exposition format,
//! rendered from the process-wide recorder. Read-only: scraping never
//! mutates the metrics themselves.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::AppState;

/// Prometheus text exposition content type
pub const CONTENT_TYPE_LATEST: &str = "text/plain; version=0.0.4; charset=utf-8";

/// `GET /metrics` - Prometheus scrape endpoint (no auth)
pub async fn prometheus_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let body = state.metrics_handle.render();
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, CONTENT_TYPE_LATEST)],
        body,
    )
}
