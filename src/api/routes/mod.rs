use axum::{
    middleware as axum_middleware,
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::api::handlers;
use crate::api::middleware::{start_timer, track_metrics};
use crate::AppState;

/// Routes owned by the hosted application itself.
fn app_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::status::service_info))
        .route("/health", get(handlers::status::health_check))
}

/// Wrap an application router with request instrumentation.
///
/// Mounts the `/metrics` scrape endpoint and applies the two metrics layers.
/// `start_timer` is the outer layer so every request is stamped before the
/// recording layer reads the stamp; the scrape endpoint itself is
/// instrumented like any other route.
pub fn instrument(app: Router<Arc<AppState>>) -> Router<Arc<AppState>> {
    app.route("/metrics", get(handlers::metrics::prometheus_metrics))
        .layer(axum_middleware::from_fn(track_metrics))
        .layer(axum_middleware::from_fn(start_timer))
}

pub fn create_router() -> Router<Arc<AppState>> {
    instrument(app_routes())
}
