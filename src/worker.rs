// Background polling worker: the sole writer of dashboard state.
// Ticks are serialized: all three fetches of tick i resolve (or fail) before
// tick i+1 can start, and the interval skips missed ticks instead of
// bursting, so a stale response can never overwrite fresher state.

use crate::models::{
    CounterState, DashboardSnapshot, NodeConfig, PfcpAssociationMap, SamplePoint, SampleWindow,
    XdpStats, peer_count, session_count,
};
use crate::upf_repo::UpfRepo;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;
use tokio::time::{Duration, Instant, interval};

/// Rate limit for "no receivers" logging (avoid a line per tick when no one
/// is on /ws/dashboard).
const NO_RECEIVERS_WARN_INTERVAL: Duration = Duration::from_secs(60);

/// Owned polling state. Only the worker task mutates it; readers get
/// snapshots by value.
pub struct DashboardState {
    node_config: Option<NodeConfig>,
    associations: Option<PfcpAssociationMap>,
    counters: CounterState,
    window: SampleWindow,
}

impl DashboardState {
    pub fn new(now_ms: u64, poll_interval_ms: u64) -> Self {
        Self {
            node_config: None,
            associations: None,
            counters: CounterState::default(),
            window: SampleWindow::seeded(now_ms, poll_interval_ms),
        }
    }

    /// Node config is replaced wholesale on each successful fetch.
    pub fn apply_node_config(&mut self, config: NodeConfig) {
        self.node_config = Some(config);
    }

    pub fn apply_associations(&mut self, associations: PfcpAssociationMap) {
        self.associations = Some(associations);
    }

    /// Metrics derivation: folds the counter payload into the state and
    /// appends one chart point. Runs only on a successful counters fetch,
    /// so a failed tick leaves both the state and the chart untouched.
    pub fn apply_xdp_stats(&mut self, payload: XdpStats, now_ms: u64) {
        let value = self.counters.observe(payload);
        self.window.push(SamplePoint {
            timestamp_ms: now_ms,
            value,
        });
    }

    pub fn snapshot(&self, timestamp: u64) -> DashboardSnapshot {
        DashboardSnapshot {
            timestamp,
            node_config: self.node_config.clone(),
            peer_count: self.associations.as_ref().map(peer_count),
            session_count: self.associations.as_ref().map(session_count),
            counters: self.counters.clone(),
            chart: self.window.clone(),
        }
    }
}

/// Repo, channels, and shutdown for the worker.
pub struct WorkerDeps {
    pub upf_repo: Arc<UpfRepo>,
    pub tx: broadcast::Sender<DashboardSnapshot>,
    /// Latest snapshot for GET /api/dashboard.
    pub latest: Arc<RwLock<Option<DashboardSnapshot>>>,
    pub ws_dashboard_connections: Arc<AtomicUsize>,
    pub shutdown_rx: tokio::sync::oneshot::Receiver<()>,
}

/// Worker timing and logging config.
pub struct WorkerConfig {
    pub poll_interval_ms: u64,
    /// How often to log app stats (real seconds).
    pub stats_log_interval_secs: u64,
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_else(|e| {
            tracing::warn!(
                error = %e,
                operation = "get_timestamp",
                "system time error"
            );
            0
        })
}

pub fn spawn(deps: WorkerDeps, config: WorkerConfig) -> tokio::task::JoinHandle<()> {
    let WorkerDeps {
        upf_repo,
        tx,
        latest,
        ws_dashboard_connections,
        mut shutdown_rx,
    } = deps;
    let WorkerConfig {
        poll_interval_ms,
        stats_log_interval_secs,
    } = config;

    let stats_log_interval = Duration::from_secs(stats_log_interval_secs);

    tokio::spawn(async move {
        let mut tick = interval(Duration::from_millis(poll_interval_ms));
        tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut stats_log_tick = interval(stats_log_interval);
        stats_log_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        let mut state = DashboardState::new(now_ms(), poll_interval_ms);
        let mut ticks_total: u64 = 0;
        let mut fetch_failures_total: u64 = 0;
        let mut last_no_receivers_warn: Option<Instant> = None;

        let worker_span = tracing::span!(tracing::Level::DEBUG, "poller", poll_interval_ms);
        let _guard = worker_span.enter();

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    ticks_total += 1;

                    // Three independent reads per tick; each failure is
                    // logged and leaves that piece of state as it was.
                    let (config_res, associations_res, stats_res) = tokio::join!(
                        upf_repo.get_node_config(),
                        upf_repo.get_associations(),
                        upf_repo.get_xdp_stats(),
                    );

                    match config_res {
                        Ok(c) => state.apply_node_config(c),
                        Err(e) => {
                            fetch_failures_total += 1;
                            tracing::warn!(
                                error = %e,
                                operation = "get_node_config",
                                "node config fetch failed"
                            );
                        }
                    }
                    match associations_res {
                        Ok(a) => state.apply_associations(a),
                        Err(e) => {
                            fetch_failures_total += 1;
                            tracing::warn!(
                                error = %e,
                                operation = "get_associations",
                                "association table fetch failed"
                            );
                        }
                    }
                    match stats_res {
                        Ok(s) => state.apply_xdp_stats(s, now_ms()),
                        Err(e) => {
                            fetch_failures_total += 1;
                            tracing::warn!(
                                error = %e,
                                operation = "get_xdp_stats",
                                "xdp stats fetch failed"
                            );
                        }
                    }

                    let snapshot = state.snapshot(now_ms());
                    if tx.send(snapshot.clone()).is_err() {
                        let should_warn = last_no_receivers_warn
                            .is_none_or(|t| t.elapsed() >= NO_RECEIVERS_WARN_INTERVAL);
                        if should_warn {
                            tracing::debug!(
                                operation = "broadcast_snapshot",
                                "No active WebSocket clients; broadcast channel has no receivers"
                            );
                            last_no_receivers_warn = Some(Instant::now());
                        }
                    }
                    if let Ok(mut cell) = latest.write() {
                        *cell = Some(snapshot);
                    }
                }
                _ = &mut shutdown_rx => {
                    tracing::debug!("Poller shutting down");
                    break;
                }
                _ = stats_log_tick.tick() => {
                    tracing::info!(
                        ws_dashboard_clients =
                            ws_dashboard_connections.load(Ordering::Relaxed),
                        ticks_total,
                        fetch_failures_total,
                        "app stats"
                    );
                }
            }
        }
    })
}
