//! Prometheus metrics for the API server.

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> PrometheusHandle {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "cineview_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "cineview_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "cineview_http_requests_in_flight";

    // Decision metrics
    pub const DECISIONS_TOTAL: &str = "cineview_decisions_total";
    pub const DECISION_DURATION_SECONDS: &str = "cineview_decision_duration_seconds";
    pub const RISK_FLAGS_TOTAL: &str = "cineview_risk_flags_total";

    // Memoization metrics
    pub const DECISION_CACHE_HITS_TOTAL: &str = "cineview_decision_cache_hits_total";
    pub const DECISION_CACHE_MISSES_TOTAL: &str = "cineview_decision_cache_misses_total";
}

/// Record an HTTP request.
///
/// The route set is fixed (no path parameters), so paths are usable as
/// labels without sanitization.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record a decision evaluation.
pub fn record_decision(project_type: &str, platform: &str, duration_secs: f64) {
    let labels = [
        ("project_type", project_type.to_string()),
        ("platform", platform.to_string()),
    ];
    counter!(names::DECISIONS_TOTAL, &labels).increment(1);
    histogram!(names::DECISION_DURATION_SECONDS).record(duration_secs);
}

/// Record a fired risk flag.
pub fn record_risk_flag(flag: &str) {
    let labels = [("flag", flag.to_string())];
    counter!(names::RISK_FLAGS_TOTAL, &labels).increment(1);
}

/// Record a decision cache hit.
pub fn record_cache_hit() {
    counter!(names::DECISION_CACHE_HITS_TOTAL).increment(1);
}

/// Record a decision cache miss.
pub fn record_cache_miss() {
    counter!(names::DECISION_CACHE_MISSES_TOTAL).increment(1);
}

/// Metrics middleware for HTTP requests.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    // Increment in-flight counter
    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);

    let response = next.run(request).await;

    // Decrement in-flight counter
    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    let status = response.status().as_u16();
    let duration = start.elapsed().as_secs_f64();

    record_http_request(&method, &path, status, duration);

    response
}
