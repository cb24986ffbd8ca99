// Shared test helpers: payload builders and an in-process mock UPF API

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Backing state for the mock UPF API: a settable pass counter and
/// per-endpoint failure switches.
#[derive(Default)]
pub struct MockUpf {
    pub pass: AtomicU64,
    pub fail_config: AtomicBool,
    pub fail_associations: AtomicBool,
    pub fail_xdp_stats: AtomicBool,
}

impl MockUpf {
    pub fn set_pass(&self, value: u64) {
        self.pass.store(value, Ordering::Relaxed);
    }
}

pub fn sample_associations_json() -> serde_json::Value {
    serde_json::json!({
        "smf1": { "Sessions": { "a": {}, "b": {} } },
        "smf2": { "Sessions": {} }
    })
}

async fn config_handler(State(mock): State<Arc<MockUpf>>) -> impl IntoResponse {
    if mock.fail_config.load(Ordering::Relaxed) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(serde_json::json!({
        "ApiAddress": ":8080",
        "PfcpAddress": ":8805",
        "PfcpNodeId": "10.0.0.1",
        "MetricsAddress": ":9090"
    }))
    .into_response()
}

async fn associations_handler(State(mock): State<Arc<MockUpf>>) -> impl IntoResponse {
    if mock.fail_associations.load(Ordering::Relaxed) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(sample_associations_json()).into_response()
}

async fn xdp_stats_handler(State(mock): State<Arc<MockUpf>>) -> impl IntoResponse {
    if mock.fail_xdp_stats.load(Ordering::Relaxed) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(serde_json::json!({ "pass": mock.pass.load(Ordering::Relaxed) })).into_response()
}

/// Serves the three UPF endpoints on an OS-assigned port. Returns the base
/// URL and the shared mock state.
pub async fn spawn_mock_upf() -> (String, Arc<MockUpf>) {
    let mock = Arc::new(MockUpf::default());
    let app = Router::new()
        .route("/api/v1/config", get(config_handler))
        .route("/api/v1/pfcp_associations/full", get(associations_handler))
        .route("/api/v1/xdp_stats", get(xdp_stats_handler))
        .with_state(mock.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), mock)
}
