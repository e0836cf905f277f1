//! HTTP record provider
//!
//! Fetches the catalog as a JSON array from a remote endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::{ProviderError, Record, RecordProvider};

/// Default catalog endpoint
pub const DEFAULT_ENDPOINT: &str = "https://www.montemagno.com/monkeys.json";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for fetching records from a JSON endpoint
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: Client,
    endpoint: String,
}

impl HttpProvider {
    /// Creates a new provider for `endpoint` with the given request timeout
    ///
    /// # Returns
    /// * `Ok(HttpProvider)` on success
    /// * `Err(ProviderError::Http)` if the HTTP client cannot be built
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Creates a new provider with a custom HTTP client
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// The URL this provider fetches from
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Parse a response body into records
fn parse_records(body: &str) -> Result<Vec<Record>, ProviderError> {
    Ok(serde_json::from_str(body)?)
}

#[async_trait]
impl RecordProvider for HttpProvider {
    async fn fetch_all(&self) -> Result<Vec<Record>, ProviderError> {
        debug!(endpoint = %self.endpoint, "fetching records");

        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let records = parse_records(&text)?;

        debug!(count = records.len(), "fetched records");
        Ok(records)
    }

    async fn is_available(&self) -> bool {
        match self.client.head(&self.endpoint).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!(error = %e, "availability probe failed");
                false
            }
        }
    }
}
