use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use holidayd::config::Config;
use holidayd::state::AppState;
use http_body_util::BodyExt;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::{Arc, OnceLock};
use tower::ServiceExt;

/// The recorder is process-global, so every test shares one handle.
fn prometheus_handle() -> PrometheusHandle {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
    HANDLE
        .get_or_init(|| {
            PrometheusBuilder::new()
                .install_recorder()
                .expect("Failed to install Prometheus recorder")
        })
        .clone()
}

fn app(prometheus_handle: Option<PrometheusHandle>) -> Router {
    let path =
        std::env::temp_dir().join(format!("holidayd-metrics-test-{}.db", uuid::Uuid::new_v4()));
    let mut config = Config::default();
    config.database.url = Some(format!("sqlite:{}?mode=rwc", path.display()));

    let state = AppState::new(config, prometheus_handle).expect("Failed to create app state");
    holidayd::api::router(Arc::new(state))
}

async fn get_text(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_metrics_count_requests_by_route() {
    let app = app(Some(prometheus_handle()));

    let (status, _) = get_text(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);

    let (status, text) = get_text(&app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(text.contains("http_requests_total"), "{text}");
    assert!(text.contains(r#"path="/api/health""#), "{text}");
    assert!(text.contains(r#"method="GET""#), "{text}");
    assert!(text.contains(r#"status="200""#), "{text}");
    assert!(text.contains("http_request_duration_seconds"), "{text}");
}

#[tokio::test]
async fn test_unmatched_paths_share_fallback_label() {
    let app = app(Some(prometheus_handle()));

    get_text(&app, "/some/page/that/does/not/exist").await;

    let (_, text) = get_text(&app, "/metrics").await;
    assert!(text.contains(r#"path="fallback""#), "{text}");
    assert!(!text.contains("/some/page/that/does/not/exist"), "{text}");
}

#[tokio::test]
async fn test_metrics_disabled_message() {
    let app = app(None);

    let (status, text) = get_text(&app, "/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, "Metrics not enabled or failed to initialize");
}
