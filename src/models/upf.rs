// Wire models for the UPF REST API

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// GET /api/v1/config: node addresses as the UPF reports them.
/// Replaced wholesale on every successful fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NodeConfig {
    pub api_address: String,
    pub pfcp_address: String,
    pub pfcp_node_id: String,
    pub metrics_address: String,
}

/// One PFCP association. Only the cardinality of the session map is
/// consumed; session bodies are carried opaquely.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PfcpAssociation {
    #[serde(default)]
    pub sessions: BTreeMap<String, serde_json::Value>,
}

/// GET /api/v1/pfcp_associations/full: peer node id to association.
pub type PfcpAssociationMap = BTreeMap<String, PfcpAssociation>;

/// GET /api/v1/xdp_stats: cumulative forwarding counters from the datapath.
/// `pass` only increases between ticks under normal operation; a restart of
/// the datapath resets it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct XdpStats {
    pub pass: u64,
}

/// Connected SMF peers.
pub fn peer_count(associations: &PfcpAssociationMap) -> usize {
    associations.len()
}

/// Active PDU sessions summed across all peers.
pub fn session_count(associations: &PfcpAssociationMap) -> usize {
    associations.values().map(|a| a.sessions.len()).sum()
}
