//! HTTP client for the Practicum homework-status endpoint.

use async_trait::async_trait;
use hwbot_core::{config::ApiConfig, error::HwbotError, traits::StatusSource};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Client for the review API. One GET per poll cycle.
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
    timeout: Duration,
}

impl PracticumClient {
    /// Create a new client from config and the API bearer token.
    pub fn new(config: &ApiConfig, token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            token,
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn homework_statuses(&self, from_date: i64) -> Result<Value, HwbotError> {
        debug!("requesting {} with from_date={from_date}", self.endpoint);

        let resp = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| HwbotError::Connection(format!("review API unreachable: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(HwbotError::Api(status.as_u16()));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| HwbotError::Payload(format!("response body is not JSON: {e}")))?;

        debug!("review API answered OK");
        Ok(body)
    }
}
