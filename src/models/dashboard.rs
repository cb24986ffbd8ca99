// Derived dashboard snapshot, published once per poll tick.

use serde::Serialize;

use super::{CounterState, NodeConfig, SampleWindow};

/// Everything the dashboard UI renders, derived from the latest fetched
/// state. Counts are None until the association table has been fetched at
/// least once; an empty table yields Some(0).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub timestamp: u64,
    pub node_config: Option<NodeConfig>,
    pub peer_count: Option<usize>,
    pub session_count: Option<usize>,
    pub counters: CounterState,
    pub chart: SampleWindow,
}
