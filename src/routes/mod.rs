// HTTP + WebSocket routes

mod http;
mod ws;

use axum::{Router, routing::get};
use std::sync::atomic::AtomicUsize;
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;
use tower_http::cors::{Any, CorsLayer};

use crate::models::DashboardSnapshot;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) snapshot_tx: broadcast::Sender<DashboardSnapshot>,
    pub(crate) latest: Arc<RwLock<Option<DashboardSnapshot>>>,
    pub(crate) ws_dashboard_connections: Arc<AtomicUsize>,
}

pub fn app(
    snapshot_tx: broadcast::Sender<DashboardSnapshot>,
    latest: Arc<RwLock<Option<DashboardSnapshot>>>,
    ws_dashboard_connections: Arc<AtomicUsize>,
) -> Router {
    let state = AppState {
        snapshot_tx,
        latest,
        ws_dashboard_connections,
    };
    Router::new()
        .route("/", get(|| async { "upfmon: UPF dashboard backend" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/dashboard", get(http::dashboard_handler)) // GET /api/dashboard
        .route("/ws/dashboard", get(ws::ws_dashboard)) // WS /ws/dashboard
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
