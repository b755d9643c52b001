//! HTTP client for the upstream timer endpoint

use std::time::Duration;

use tracing::debug;

use super::{parse_payload, PollError};
use crate::state::TimerState;

/// Fetches timer snapshots from a fixed endpoint URL
#[derive(Debug, Clone)]
pub struct EndpointClient {
    client: reqwest::Client,
    url: String,
}

impl EndpointClient {
    /// Build a client whose requests give up after `timeout`
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, PollError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Perform one poll: GET the endpoint and parse the body
    pub async fn fetch(&self) -> Result<TimerState, PollError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PollError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        debug!("Endpoint answered: {:?}", body);

        Ok(parse_payload(&body)?)
    }
}
