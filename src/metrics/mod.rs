//! Metrics Module for the HTTP Gateway
//!
//! Provides Prometheus-compatible metrics for monitoring:
//! - Request counts by method, path, and status
//! - Request latency histogram (milliseconds)
//!
//! Aggregation and exposition are handled by the process-wide
//! `metrics-exporter-prometheus` recorder; this module owns the metric
//! names, label keys, bucket bounds, and the record operations.

use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};

/// Metric names as constants for consistency
pub mod names {
    pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
    pub const HTTP_REQUEST_DURATION: &str = "http_request_duration";
}

/// Label keys
pub mod labels {
    pub const METHOD: &str = "method";
    pub const PATH: &str = "path";
    pub const STATUS: &str = "status";
}

/// Request latency buckets, in milliseconds
const HTTP_DURATION_BUCKETS_MS: &[f64] = &[
    1.0, 2.5, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0,
];

/// Install the process-wide Prometheus recorder
///
/// Returns the handle used to render exposition snapshots. Must be called
/// once at startup, before the first request is served.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full(names::HTTP_REQUEST_DURATION.to_string()),
            HTTP_DURATION_BUCKETS_MS,
        )?
        .install_recorder()?;

    describe_counter!(
        names::HTTP_REQUESTS_TOTAL,
        "Total HTTP Requests (method, path, status)"
    );
    describe_histogram!(
        names::HTTP_REQUEST_DURATION,
        Unit::Milliseconds,
        "HTTP Request latency (milliseconds)"
    );

    Ok(handle)
}

/// Count one completed HTTP request
pub fn increment_http_requests(method: &str, path: &str, status: u16) {
    counter!(
        names::HTTP_REQUESTS_TOTAL,
        labels::METHOD => method.to_string(),
        labels::PATH => path.to_string(),
        labels::STATUS => status.to_string()
    )
    .increment(1);
}

/// Record one request latency observation, in milliseconds
pub fn observe_http_request_duration(method: &str, path: &str, status: u16, latency_ms: f64) {
    histogram!(
        names::HTTP_REQUEST_DURATION,
        labels::METHOD => method.to_string(),
        labels::PATH => path.to_string(),
        labels::STATUS => status.to_string()
    )
    .record(latency_ms);
}

/// Shared recorder handle for tests.
///
/// The recorder is global to the process, so tests install it once and
/// isolate themselves by using distinct request paths.
#[cfg(test)]
pub(crate) fn test_recorder_handle() -> PrometheusHandle {
    use std::sync::OnceLock;

    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
    HANDLE
        .get_or_init(|| init_metrics().expect("failed to install Prometheus recorder"))
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names() {
        assert_eq!(names::HTTP_REQUESTS_TOTAL, "http_requests_total");
        assert_eq!(names::HTTP_REQUEST_DURATION, "http_request_duration");
    }

    #[test]
    fn test_label_keys() {
        assert_eq!(labels::METHOD, "method");
        assert_eq!(labels::PATH, "path");
        assert_eq!(labels::STATUS, "status");
    }

    #[test]
    fn duration_buckets_are_sorted() {
        assert!(HTTP_DURATION_BUCKETS_MS.windows(2).all(|w| w[0] < w[1]));
    }
}
