// Counter delta derivation and the fixed-length chart window.

use serde::Serialize;
use std::collections::VecDeque;

use super::XdpStats;

/// Number of points fed to each time-series chart.
pub const CHART_WINDOW_LEN: usize = 21;

/// Forwarding-counter state across ticks. `changed` is derived on every
/// observation, never set directly.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterState {
    pub prev: Option<XdpStats>,
    pub curr: Option<XdpStats>,
    pub changed: bool,
}

impl CounterState {
    /// Folds a freshly fetched counter payload into the state and returns
    /// the pass delta to chart. The first observation has no baseline:
    /// delta 0, `changed` false. A counter reset (new pass below the old)
    /// produces a negative delta, reported as-is.
    pub fn observe(&mut self, payload: XdpStats) -> i64 {
        let prev = self.curr.take();
        let delta = match &prev {
            Some(p) => payload.pass as i64 - p.pass as i64,
            None => 0,
        };
        self.changed = prev.is_some() && delta != 0;
        self.prev = prev;
        self.curr = Some(payload);
        delta
    }

    /// Pass delta between the last two observations, when both exist.
    pub fn last_delta(&self) -> Option<i64> {
        match (&self.prev, &self.curr) {
            (Some(p), Some(c)) => Some(c.pass as i64 - p.pass as i64),
            _ => None,
        }
    }
}

/// One chart point: ms since epoch and the per-tick pass delta.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SamplePoint {
    pub timestamp_ms: u64,
    pub value: i64,
}

/// Fixed-length FIFO of chart points. Holds exactly CHART_WINDOW_LEN points
/// from construction on; `push` drops the oldest.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct SampleWindow {
    samples: VecDeque<SamplePoint>,
}

impl SampleWindow {
    /// Pre-seeds the window with zero-valued points spaced one poll interval
    /// apart, ending at `now_ms`, so charts open on a flat baseline instead
    /// of growing point by point.
    pub fn seeded(now_ms: u64, interval_ms: u64) -> Self {
        let samples = (0..CHART_WINDOW_LEN)
            .map(|i| SamplePoint {
                timestamp_ms: now_ms
                    .saturating_sub((CHART_WINDOW_LEN - 1 - i) as u64 * interval_ms),
                value: 0,
            })
            .collect();
        Self { samples }
    }

    pub fn push(&mut self, point: SamplePoint) {
        self.samples.pop_front();
        self.samples.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&SamplePoint> {
        self.samples.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SamplePoint> {
        self.samples.iter()
    }
}
