//! Record provider abstraction
//!
//! A provider is anything that can hand back the full record set. The cache
//! only depends on this trait, so the HTTP client and the built-in static
//! source are interchangeable.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use thiserror::Error;

use super::Record;

/// Errors that can occur when fetching records from a provider
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP request failed (connect error, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server returned HTTP {0}")]
    Status(u16),

    /// Failed to parse the response body
    #[error("Failed to parse records: {0}")]
    Parse(#[from] serde_json::Error),

    /// The source is unreachable for another reason
    #[error("Record source unavailable: {0}")]
    Unavailable(String),

    /// The source returned no records
    #[error("Record source returned an empty catalog")]
    EmptyCatalog,
}

/// Capability to read the record set from some source
///
/// All operations are side-effect free reads. Only [`fetch_all`] is
/// required; the others have default implementations built on it.
///
/// [`fetch_all`]: RecordProvider::fetch_all
#[async_trait]
pub trait RecordProvider: Send + Sync {
    /// Fetches the full record set
    async fn fetch_all(&self) -> Result<Vec<Record>, ProviderError>;

    /// Fetches a single record by name, ignoring case
    ///
    /// A missing record is `Ok(None)`, not an error.
    async fn fetch_by_name(&self, name: &str) -> Result<Option<Record>, ProviderError> {
        let records = self.fetch_all().await?;
        Ok(records.into_iter().find(|record| record.matches_name(name)))
    }

    /// Fetches one record chosen uniformly at random
    async fn fetch_random(&self) -> Result<Record, ProviderError> {
        let records = self.fetch_all().await?;
        records
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(ProviderError::EmptyCatalog)
    }

    /// Reports whether the source is reachable; never fails
    async fn is_available(&self) -> bool;
}
