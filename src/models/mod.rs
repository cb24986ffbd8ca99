// Domain models (UPF API wire types + derived dashboard state)

mod counters;
mod dashboard;
mod upf;

pub use counters::{CHART_WINDOW_LEN, CounterState, SamplePoint, SampleWindow};
pub use dashboard::DashboardSnapshot;
pub use upf::{
    NodeConfig, PfcpAssociation, PfcpAssociationMap, XdpStats, peer_count, session_count,
};
