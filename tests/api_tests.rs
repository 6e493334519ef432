//! Integration tests for the scrape and health endpoints

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use portainer_exporter::api::{create_router, AppState, METRICS_CONTENT_TYPE};
use portainer_exporter::{ContainerMetric, Snapshot, SnapshotStore};
use std::sync::Arc;
use tower::ServiceExt;

fn setup_test_app() -> (Router, SnapshotStore) {
    let store = SnapshotStore::new();
    let router = create_router(Arc::new(AppState::new(store.clone())));
    (router, store)
}

fn sample_snapshot() -> Snapshot {
    Snapshot {
        metrics: vec![ContainerMetric {
            name: "web-server".to_string(),
            hostname: "docker-host-1".to_string(),
            image: "nginx:latest".to_string(),
            state: 1,
            health: 1,
            restart_count: 0,
        }],
        last_error: None,
        last_update: 1234567890.5,
    }
}

async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_metrics_returns_rendered_snapshot() {
    let (app, store) = setup_test_app();
    store.publish(sample_snapshot());

    let (status, content_type, body) = send(app, Method::GET, "/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some(METRICS_CONTENT_TYPE));
    assert!(body.contains(
        "container_state{container_name=\"web-server\",hostname=\"docker-host-1\",image=\"nginx:latest\"} 1\n"
    ));
    assert!(body.contains("portainer_exporter_up 1\n"));
    assert!(body.contains("portainer_exporter_last_scrape_timestamp 1234567890\n"));
}

#[tokio::test]
async fn test_metrics_is_ok_even_when_collection_failed() {
    let (app, store) = setup_test_app();
    store.publish(Snapshot {
        last_error: Some("connection refused".to_string()),
        ..Default::default()
    });

    let (status, _, body) = send(app, Method::GET, "/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("portainer_exporter_up 0\n"));
}

#[tokio::test]
async fn test_health_without_error() {
    let (app, _store) = setup_test_app();

    let (status, content_type, body) = send(app, Method::GET, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, r#"{"status":"up","last_error":null}"#);
}

#[tokio::test]
async fn test_health_reports_last_error() {
    let (app, store) = setup_test_app();
    store.publish(Snapshot {
        last_error: Some("Connection failed".to_string()),
        ..Default::default()
    });

    let (status, _, body) = send(app, Method::GET, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let health: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "up");
    assert_eq!(health["last_error"], "Connection failed");
}

#[tokio::test]
async fn test_unknown_paths_are_not_found() {
    for path in ["/", "/unknown", "/api/metrics", "/metrics/extra"] {
        let (app, _store) = setup_test_app();
        let (status, _, body) = send(app, Method::GET, path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "path {}", path);
        assert!(body.is_empty());
    }
}

#[tokio::test]
async fn test_non_get_methods_not_allowed() {
    for path in ["/metrics", "/health"] {
        let (app, _store) = setup_test_app();
        let (status, _, _) = send(app, Method::POST, path).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "path {}", path);
    }

    let (app, _store) = setup_test_app();
    let (status, _, _) = send(app, Method::DELETE, "/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
