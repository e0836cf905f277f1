//! Built-in record provider
//!
//! Serves a fixed record set after a simulated network delay. Used for
//! offline mode, and with fault injection as a stand-in for a flaky remote
//! source in tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{builtin_catalog, ProviderError, Record, RecordProvider};

/// Simulated latency of a full fetch
const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(200);

/// Simulated latency of an availability probe
const DEFAULT_PROBE_DELAY: Duration = Duration::from_millis(50);

/// Provider backed by an in-memory record set
#[derive(Debug)]
pub struct StaticProvider {
    records: Vec<Record>,
    fetch_delay: Duration,
    probe_delay: Duration,
    /// When set, every fetch fails and the probe reports unavailable
    fail: AtomicBool,
    /// Number of `fetch_all` calls made so far
    fetch_count: AtomicUsize,
}

impl Default for StaticProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticProvider {
    /// Creates a provider serving the built-in catalog with simulated latency
    pub fn new() -> Self {
        Self::with_records(builtin_catalog())
    }

    /// Creates a provider serving the given records
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records,
            fetch_delay: DEFAULT_FETCH_DELAY,
            probe_delay: DEFAULT_PROBE_DELAY,
            fail: AtomicBool::new(false),
            fetch_count: AtomicUsize::new(0),
        }
    }

    /// Overrides the simulated latency of fetches and probes
    pub fn with_delay(mut self, fetch_delay: Duration, probe_delay: Duration) -> Self {
        self.fetch_delay = fetch_delay;
        self.probe_delay = probe_delay;
        self
    }

    /// Removes all simulated latency
    pub fn instant(self) -> Self {
        self.with_delay(Duration::ZERO, Duration::ZERO)
    }

    /// Switches fault injection on or off
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Number of `fetch_all` calls received, including failed ones
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    fn is_failing(&self) -> bool {
        self.fail.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordProvider for StaticProvider {
    async fn fetch_all(&self) -> Result<Vec<Record>, ProviderError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if !self.fetch_delay.is_zero() {
            tokio::time::sleep(self.fetch_delay).await;
        }

        if self.is_failing() {
            return Err(ProviderError::Unavailable(
                "simulated provider failure".to_string(),
            ));
        }

        debug!(count = self.records.len(), "serving static records");
        Ok(self.records.clone())
    }

    async fn is_available(&self) -> bool {
        if !self.probe_delay.is_zero() {
            tokio::time::sleep(self.probe_delay).await;
        }
        !self.is_failing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record {
            name: name.to_string(),
            location: "Test".to_string(),
            details: String::new(),
            image_ref: String::new(),
            population: 10,
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    #[tokio::test]
    async fn test_fetch_all_returns_builtin_catalog() {
        let provider = StaticProvider::new().instant();
        let records = provider.fetch_all().await.expect("fetch should succeed");
        assert_eq!(records.len(), 13);
        assert_eq!(provider.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_by_name_is_case_insensitive() {
        let provider = StaticProvider::new().instant();

        let found = provider.fetch_by_name("mandrill").await.unwrap();
        assert_eq!(found.map(|r| r.name), Some("Mandrill".to_string()));

        let missing = provider.fetch_by_name("gorilla").await.unwrap();
        assert!(missing.is_none(), "Absent record is not an error");
    }

    #[tokio::test]
    async fn test_fetch_random_returns_member() {
        let provider = StaticProvider::with_records(vec![record("A"), record("B")]).instant();
        let picked = provider.fetch_random().await.unwrap();
        assert!(picked.name == "A" || picked.name == "B");
    }

    #[tokio::test]
    async fn test_fetch_random_on_empty_set_fails() {
        let provider = StaticProvider::with_records(Vec::new()).instant();
        let result = provider.fetch_random().await;
        assert!(matches!(result, Err(ProviderError::EmptyCatalog)));
    }

    #[tokio::test]
    async fn test_failing_provider() {
        let provider = StaticProvider::new().instant();
        provider.set_failing(true);

        assert!(provider.fetch_all().await.is_err());
        assert!(provider.fetch_by_name("Baboon").await.is_err());
        assert!(!provider.is_available().await);

        provider.set_failing(false);
        assert!(provider.is_available().await);
        assert!(provider.fetch_all().await.is_ok());
    }
}
