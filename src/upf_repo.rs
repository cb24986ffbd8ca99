// UPF REST API client via reqwest

use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::instrument;

use crate::models::{NodeConfig, PfcpAssociationMap, XdpStats};

/// The one failure class of the polling path: a request that did not produce
/// a decodable 2xx response. The worker logs these and keeps the previous
/// state for that endpoint.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport, timeout, or body-decode failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream returned {0}")]
    Status(reqwest::StatusCode),
}

pub struct UpfRepo {
    client: reqwest::Client,
    base_url: String,
}

impl UpfRepo {
    /// The timeout bounds a hung request so a slow upstream cannot stall the
    /// poll loop (ticks are serialized).
    pub fn connect(base_url: &str, request_timeout_ms: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(request_timeout_ms))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }
        Ok(response.json::<T>().await?)
    }

    #[instrument(skip(self), fields(repo = "upf", operation = "get_node_config"))]
    pub async fn get_node_config(&self) -> Result<NodeConfig, FetchError> {
        self.get_json("/api/v1/config").await
    }

    #[instrument(skip(self), fields(repo = "upf", operation = "get_associations"))]
    pub async fn get_associations(&self) -> Result<PfcpAssociationMap, FetchError> {
        self.get_json("/api/v1/pfcp_associations/full").await
    }

    #[instrument(skip(self), fields(repo = "upf", operation = "get_xdp_stats"))]
    pub async fn get_xdp_stats(&self) -> Result<XdpStats, FetchError> {
        self.get_json("/api/v1/xdp_stats").await
    }
}
