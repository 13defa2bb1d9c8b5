//! Service status handlers
//!
//! The hosted application routes the gateway wraps: a liveness probe and a
//! service identity endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// `GET /` - service identity
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /health` - liveness probe
pub async fn health_check() -> &'static str {
    "OK"
}
