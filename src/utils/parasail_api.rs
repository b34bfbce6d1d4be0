use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

use crate::config::Env;
use crate::interfaces::{NodeStats, NodeStatsResponse};

const NODE_STATS_PATH: &str = "/api/v1/node/node_stats";
const CHECK_IN_PATH: &str = "/api/v1/node/check_in";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Status(StatusCode),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Thin client for the two Parasail node endpoints. One instance is shared
/// across all accounts; the bearer token is supplied per call.
pub struct ParasailClient {
    client: Client,
    base_url: String,
}

impl ParasailClient {
    pub fn new(env: &Env) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(env.request_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: env.api_base_url.clone(),
        })
    }

    /// Fetch points and last check-in time for the account behind `token`.
    pub async fn node_stats(&self, token: &str) -> Result<NodeStats, ApiError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, NODE_STATS_PATH))
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let body: NodeStatsResponse = response.json().await?;
        Ok(body.data)
    }

    /// Submit a daily check-in. The endpoint takes no request body; a 2xx
    /// status is the only success signal.
    pub async fn check_in(&self, token: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, CHECK_IN_PATH))
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(())
    }
}
