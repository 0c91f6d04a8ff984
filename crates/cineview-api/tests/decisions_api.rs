//! API integration tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use cineview_api::{create_router, ApiConfig, AppState};

fn test_app() -> axum::Router {
    let state = AppState::new(ApiConfig::default());
    create_router(state, None)
}

fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn evaluate_decision_returns_engine_output() {
    let app = test_app();
    let request = json_request(
        "/api/decisions",
        serde_json::json!({
            "analysis": {"technical": {"brightness": 90.0}},
            "context": {"projectType": "advertising", "platform": "social"}
        }),
    );

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let output = response_json(response).await;
    assert_eq!(output["engine_version"], "decision-v1");
    assert_eq!(output["inputs"]["project_type"], "advertising");
    assert!(output["risk_flags"]
        .as_array()
        .expect("risk_flags")
        .iter()
        .any(|f| f == "Overexposure risk"));
}

#[tokio::test]
async fn missing_analysis_is_rejected() {
    let app = test_app();
    let request = json_request("/api/decisions", serde_json::json!({}));

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert!(body["detail"]
        .as_str()
        .expect("detail")
        .contains("analysis"));
}

#[tokio::test]
async fn non_object_analysis_is_rejected() {
    let app = test_app();
    let request = json_request(
        "/api/decisions",
        serde_json::json!({"analysis": [1, 2, 3]}),
    );

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversized_objective_is_rejected() {
    let app = test_app();
    let request = json_request(
        "/api/decisions",
        serde_json::json!({
            "analysis": {},
            "context": {"objective": "x".repeat(501)}
        }),
    );

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn engine_info_reports_version() {
    let app = test_app();
    let request = Request::builder()
        .uri("/api/engine")
        .body(Body::empty())
        .expect("request");

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["engine_version"], "decision-v1");
}

#[tokio::test]
async fn health_and_readiness_respond() {
    for uri in ["/health", "/healthz", "/ready"] {
        let app = test_app();
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request");

        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn responses_carry_request_id_and_security_headers() {
    let app = test_app();
    let request = Request::builder()
        .uri("/health")
        .header("X-Request-ID", "req-42")
        .body(Body::empty())
        .expect("request");

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(
        response.headers().get("X-Request-ID").map(|v| v.as_bytes()),
        Some("req-42".as_bytes())
    );
    assert_eq!(
        response
            .headers()
            .get("X-Content-Type-Options")
            .map(|v| v.as_bytes()),
        Some("nosniff".as_bytes())
    );
}

#[tokio::test]
async fn identical_requests_serve_identical_outputs() {
    let app = test_app();
    let body = serde_json::json!({
        "analysis": {"composition": {"score": 70.0}},
        "context": {"projectType": "cinema", "platform": "print"}
    });

    let first = app
        .clone()
        .oneshot(json_request("/api/decisions", body.clone()))
        .await
        .expect("response");
    let second = app
        .oneshot(json_request("/api/decisions", body))
        .await
        .expect("response");

    assert_eq!(response_json(first).await, response_json(second).await);
}
