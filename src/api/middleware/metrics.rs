//! HTTP Metrics Middleware
//!
//! Records Prometheus metrics for every HTTP request:
//! - Request count by method, path, and status
//! - Request latency histogram (milliseconds)
//!
//! `start_timer` stamps each inbound request with its wall-clock start time
//! and `track_metrics` records the metrics once the response is ready. The
//! pair must never fail a request: a missing start stamp downgrades to a
//! logged warning and the handler's response always passes through unchanged.

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::metrics;

/// Wall-clock start time of the in-flight request.
///
/// Lives in the request extensions so concurrent requests each carry their
/// own timer.
#[derive(Debug, Clone, Copy)]
pub struct RequestStart(pub Instant);

/// Middleware to stamp every inbound request with its start time
pub async fn start_timer(mut request: Request<Body>, next: Next) -> Response {
    request.extensions_mut().insert(RequestStart(Instant::now()));
    next.run(request).await
}

/// Middleware to record HTTP metrics for each request
pub async fn track_metrics(request: Request<Body>, next: Next) -> Response {
    let started = request.extensions().get::<RequestStart>().copied();

    // Extract method and path before consuming the request
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    // Process the request
    let response = next.run(request).await;

    let status = response.status().as_u16();
    metrics::increment_http_requests(&method, &path, status);

    match started {
        Some(RequestStart(start)) => {
            let latency_ms = start.elapsed().as_secs_f64() * 1_000.0;
            metrics::observe_http_request_duration(&method, &path, status, latency_ms);
        }
        None => {
            tracing::warn!(
                %method,
                %path,
                "request completed without a start timestamp; skipping latency observation"
            );
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::to_bytes,
        http::StatusCode,
        middleware,
        routing::get,
        Extension, Router,
    };
    use tower::ServiceExt;

    use crate::metrics::names;

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn start_timer_stamps_each_request() {
        let app = Router::new()
            .route(
                "/stamped",
                get(|Extension(RequestStart(start)): Extension<RequestStart>| async move {
                    // The stamp must be a real, recent instant
                    assert!(start.elapsed().as_secs() < 60);
                    StatusCode::OK
                }),
            )
            .layer(middleware::from_fn(start_timer));

        let response = app.oneshot(get_request("/stamped")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn response_passes_through_unchanged() {
        let _ = crate::metrics::test_recorder_handle();

        let app = Router::new()
            .route(
                "/teapot",
                get(|| async { (StatusCode::IM_A_TEAPOT, "short and stout") }),
            )
            .layer(middleware::from_fn(track_metrics))
            .layer(middleware::from_fn(start_timer));

        let response = app.oneshot(get_request("/teapot")).await.unwrap();
        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"short and stout");
    }

    #[tokio::test]
    async fn counts_requests_without_start_timestamp() {
        let handle = crate::metrics::test_recorder_handle();

        // track_metrics without start_timer in front of it
        let app = Router::new()
            .route("/unstamped", get(|| async { "ok" }))
            .layer(middleware::from_fn(track_metrics));

        let response = app.oneshot(get_request("/unstamped")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let rendered = handle.render();
        let counted = rendered.lines().any(|line| {
            line.starts_with(names::HTTP_REQUESTS_TOTAL) && line.contains(r#"path="/unstamped""#)
        });
        assert!(counted, "request without a start stamp must still be counted");

        let observed = rendered.lines().any(|line| {
            line.starts_with(names::HTTP_REQUEST_DURATION) && line.contains(r#"path="/unstamped""#)
        });
        assert!(!observed, "no latency observation without a start stamp");
    }
}
