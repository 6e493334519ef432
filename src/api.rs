//! HTTP responder for Prometheus scrapes and liveness checks

use axum::{
    extract::State,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use http::{header, StatusCode};
use std::sync::Arc;
use tracing::info;

use crate::exporter::render;
use crate::store::SnapshotStore;
use crate::types::HealthPayload;

pub const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: SnapshotStore,
}

impl AppState {
    pub fn new(store: SnapshotStore) -> Self {
        Self { store }
    }
}

/// Prometheus metrics endpoint, always 200 regardless of upstream errors
async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.store.read();
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, METRICS_CONTENT_TYPE)],
        render(&snapshot),
    )
}

async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.store.read();
    let body = HealthPayload {
        status: "up",
        last_error: snapshot.last_error.as_deref(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/metrics", get(metrics).fallback(method_not_allowed))
        .route("/health", get(health).fallback(method_not_allowed))
        .fallback(not_found)
        .with_state(state)
}

/// Start the API server
pub async fn serve(port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    info!("Starting HTTP server on {}", addr);
    info!("Listening for Prometheus scrapes on /metrics");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
