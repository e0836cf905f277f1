//! Record cache sitting between callers and a record provider
//!
//! Provides a `RecordCache` that serves the record set from memory while it
//! is fresh, refreshes it from the provider once it expires, and degrades to
//! a fallback dataset when the provider fails.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::clock::{Clock, SystemClock};
use crate::data::{fallback_catalog, Record, RecordProvider};
use crate::stats::{summarize, Statistics};
use crate::tracker::AccessTracker;

/// Default cache validity window in minutes
pub const DEFAULT_EXPIRY_MINUTES: i64 = 30;

/// Errors surfaced by the cache to its callers
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CacheError {
    /// Random selection was requested over an empty record set
    #[error("No records available")]
    EmptyCatalog,
}

/// Tunables for a [`RecordCache`]
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long a refreshed record set stays valid
    pub expiry: Duration,
    /// Records served when the provider fails; never written into the cache
    pub fallback: Vec<Record>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            expiry: Duration::minutes(DEFAULT_EXPIRY_MINUTES),
            fallback: fallback_catalog(),
        }
    }
}

/// The cached record set and when it was fetched
///
/// Both fields are always replaced together.
#[derive(Debug, Default)]
struct CacheState {
    records: Option<Arc<Vec<Record>>>,
    last_refresh: Option<DateTime<Utc>>,
}

impl CacheState {
    /// Returns the records if they are non-empty and younger than `expiry`
    fn fresh_records(&self, now: DateTime<Utc>, expiry: Duration) -> Option<Arc<Vec<Record>>> {
        let records = self.records.as_ref()?;
        let last_refresh = self.last_refresh?;
        if records.is_empty() || now - last_refresh >= expiry {
            return None;
        }
        Some(Arc::clone(records))
    }
}

/// In-memory, time-bounded cache of the record set
///
/// Name lookups and random picks that resolve to a record are counted in the
/// shared [`AccessTracker`].
pub struct RecordCache {
    provider: Arc<dyn RecordProvider>,
    tracker: Arc<AccessTracker>,
    clock: Arc<dyn Clock>,
    expiry: Duration,
    fallback: Arc<Vec<Record>>,
    state: RwLock<CacheState>,
    /// Held while a refresh is in flight so concurrent misses fetch once
    refresh_lock: Mutex<()>,
}

impl RecordCache {
    /// Creates a cache over `provider` using the system clock and a fresh tracker
    pub fn new(provider: Arc<dyn RecordProvider>, config: CacheConfig) -> Self {
        Self {
            provider,
            tracker: Arc::new(AccessTracker::new()),
            clock: Arc::new(SystemClock),
            expiry: config.expiry,
            fallback: Arc::new(config.fallback),
            state: RwLock::new(CacheState::default()),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Replaces the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Shares an existing access tracker
    pub fn with_tracker(mut self, tracker: Arc<AccessTracker>) -> Self {
        self.tracker = tracker;
        self
    }

    /// The tracker that records lookups and random picks
    pub fn tracker(&self) -> &Arc<AccessTracker> {
        &self.tracker
    }

    /// The configured validity window
    pub fn expiry(&self) -> Duration {
        self.expiry
    }

    /// When the cached records were last refreshed, if they are held
    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last_refresh
    }

    /// Whether the next `get_all` would be served without a provider call
    pub fn is_valid(&self) -> bool {
        self.fresh_records().is_some()
    }

    fn fresh_records(&self) -> Option<Arc<Vec<Record>>> {
        let now = self.clock.now();
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .fresh_records(now, self.expiry)
    }

    /// Returns the full record set
    ///
    /// # Behavior
    /// - Serves the cached records while they are fresh
    /// - Otherwise fetches from the provider and caches the result
    /// - On provider failure, returns the fallback records without caching
    ///   them, so the next call retries the provider
    pub async fn get_all(&self) -> Arc<Vec<Record>> {
        if let Some(records) = self.fresh_records() {
            debug!(count = records.len(), "serving cached records");
            return records;
        }

        let _refresh = self.refresh_lock.lock().await;

        // Another caller may have refreshed while we waited for the lock
        if let Some(records) = self.fresh_records() {
            debug!(count = records.len(), "serving records refreshed by another caller");
            return records;
        }

        match self.provider.fetch_all().await {
            Ok(records) => {
                let records = Arc::new(records);
                let now = self.clock.now();
                {
                    let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
                    *state = CacheState {
                        records: Some(Arc::clone(&records)),
                        last_refresh: Some(now),
                    };
                }
                info!(count = records.len(), "record cache refreshed");
                records
            }
            Err(e) => {
                warn!(
                    error = %e,
                    fallback = self.fallback.len(),
                    "provider failed, serving fallback records"
                );
                Arc::clone(&self.fallback)
            }
        }
    }

    /// Looks up a record by name, ignoring case
    ///
    /// Blank names return `None` without touching the cache. A hit is
    /// counted under the record's stored name.
    pub async fn get_by_name(&self, name: &str) -> Option<Record> {
        if name.trim().is_empty() {
            return None;
        }

        let records = self.get_all().await;
        let found = records.iter().find(|record| record.matches_name(name)).cloned();

        match &found {
            Some(record) => {
                self.tracker.increment(&record.name);
                debug!(query = name, name = %record.name, "record found");
            }
            None => debug!(query = name, "no record matches"),
        }

        found
    }

    /// Picks a record uniformly at random and counts the access
    ///
    /// # Returns
    /// * `Ok(Record)` - One of the records currently served
    /// * `Err(CacheError::EmptyCatalog)` - If the resolved record set is empty
    pub async fn get_random(&self) -> Result<Record, CacheError> {
        let records = self.get_all().await;
        let record = records
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(CacheError::EmptyCatalog)?;

        self.tracker.increment(&record.name);
        debug!(name = %record.name, "random record selected");
        Ok(record)
    }

    /// Drops the cached records; access counters are left alone
    pub fn clear(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *state = CacheState::default();
        info!("record cache cleared");
    }

    /// Asks the provider whether it is reachable
    pub async fn is_server_available(&self) -> bool {
        let available = self.provider.is_available().await;
        debug!(available, "provider availability checked");
        available
    }

    /// Summary statistics over the records currently served
    pub async fn statistics(&self) -> Statistics {
        let records = self.get_all().await;
        summarize(&records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use crate::data::{builtin_catalog, StaticProvider};
    use std::collections::HashMap;
    use std::time::Duration as StdDuration;

    fn record(name: &str) -> Record {
        Record {
            name: name.to_string(),
            location: "Test".to_string(),
            details: String::new(),
            image_ref: String::new(),
            population: 100,
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    /// Cache over an instant static provider with a manual clock
    fn create_test_cache(
        records: Vec<Record>,
    ) -> (RecordCache, Arc<StaticProvider>, Arc<ManualClock>) {
        let provider = Arc::new(StaticProvider::with_records(records).instant());
        let clock = Arc::new(ManualClock::default());
        let cache = RecordCache::new(provider.clone(), CacheConfig::default())
            .with_clock(clock.clone());
        (cache, provider, clock)
    }

    #[tokio::test]
    async fn test_second_get_all_within_window_uses_cache() {
        let (cache, provider, clock) = create_test_cache(builtin_catalog());

        let first = cache.get_all().await;
        clock.advance(Duration::minutes(29));
        let second = cache.get_all().await;

        assert_eq!(provider.fetch_count(), 1, "Provider should be called once");
        assert!(Arc::ptr_eq(&first, &second), "Same cached set should be served");
    }

    #[tokio::test]
    async fn test_get_all_after_expiry_refetches() {
        let (cache, provider, clock) = create_test_cache(builtin_catalog());

        cache.get_all().await;
        clock.advance(Duration::minutes(30));
        assert!(!cache.is_valid());
        cache.get_all().await;

        assert_eq!(provider.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_fallback_is_not_cached() {
        let (cache, provider, _clock) = create_test_cache(builtin_catalog());
        provider.set_failing(true);

        let records = cache.get_all().await;
        assert_eq!(*records, fallback_catalog());
        assert!(!cache.is_valid(), "Fallback must not populate the cache");
        assert!(cache.last_refresh().is_none());

        provider.set_failing(false);
        let records = cache.get_all().await;

        assert_eq!(provider.fetch_count(), 2, "Next call should retry the provider");
        assert_eq!(records.len(), 13);
        assert!(cache.is_valid());
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_state_invalid() {
        let (cache, provider, clock) = create_test_cache(builtin_catalog());

        cache.get_all().await;
        let refreshed_at = cache.last_refresh();
        clock.advance(Duration::minutes(45));
        provider.set_failing(true);

        let records = cache.get_all().await;

        assert_eq!(records.len(), fallback_catalog().len());
        assert_eq!(cache.last_refresh(), refreshed_at, "State must not change on failure");
    }

    #[tokio::test]
    async fn test_custom_fallback() {
        let provider = Arc::new(StaticProvider::new().instant());
        provider.set_failing(true);
        let config = CacheConfig {
            fallback: vec![record("Only")],
            ..CacheConfig::default()
        };
        let cache = RecordCache::new(provider, config);

        let records = cache.get_all().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Only");
    }

    #[tokio::test]
    async fn test_get_by_name_is_case_insensitive() {
        let (cache, _provider, _clock) = create_test_cache(builtin_catalog());

        let upper = cache.get_by_name("BABOON").await;
        let lower = cache.get_by_name("baboon").await;

        assert_eq!(upper.map(|r| r.name), Some("Baboon".to_string()));
        assert_eq!(lower.map(|r| r.name), Some("Baboon".to_string()));
        assert_eq!(cache.tracker().count("Baboon"), 2);
    }

    #[tokio::test]
    async fn test_get_by_name_counts_each_hit() {
        let (cache, _provider, _clock) = create_test_cache(builtin_catalog());

        for _ in 0..3 {
            cache.get_by_name("Baboon").await;
        }
        assert_eq!(cache.tracker().count("Baboon"), 3);

        let before = cache.tracker().snapshot();
        assert!(cache.get_by_name("Gorilla").await.is_none());
        assert_eq!(cache.tracker().snapshot(), before, "Miss must not change counters");
    }

    #[tokio::test]
    async fn test_blank_name_does_not_touch_cache() {
        let (cache, provider, _clock) = create_test_cache(builtin_catalog());

        assert!(cache.get_by_name("").await.is_none());
        assert!(cache.get_by_name("   \t").await.is_none());

        assert_eq!(provider.fetch_count(), 0);
        assert!(cache.tracker().is_empty());
    }

    #[tokio::test]
    async fn test_get_by_name_uses_fallback_when_provider_fails() {
        let (cache, provider, _clock) = create_test_cache(builtin_catalog());
        provider.set_failing(true);

        assert!(cache.get_by_name("sebastian").await.is_some());
        assert!(cache.get_by_name("Mandrill").await.is_none());
    }

    #[tokio::test]
    async fn test_get_random_on_empty_set() {
        let (cache, provider, _clock) = create_test_cache(Vec::new());

        assert_eq!(cache.get_random().await, Err(CacheError::EmptyCatalog));
        assert!(cache.tracker().is_empty());
        assert!(!cache.is_valid(), "An empty set never counts as valid");

        cache.get_all().await;
        assert_eq!(provider.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_get_random_counts_access() {
        let (cache, _provider, _clock) = create_test_cache(vec![record("Solo")]);

        let picked = cache.get_random().await.expect("Should pick a record");

        assert_eq!(picked.name, "Solo");
        assert_eq!(cache.tracker().count("Solo"), 1);
    }

    #[tokio::test]
    async fn test_get_random_is_roughly_uniform() {
        let records = builtin_catalog();
        let (cache, _provider, _clock) = create_test_cache(records.clone());
        let trials = 13_000;

        let mut seen: HashMap<String, usize> = HashMap::new();
        for _ in 0..trials {
            let picked = cache.get_random().await.unwrap();
            *seen.entry(picked.name).or_insert(0) += 1;
        }

        assert_eq!(seen.len(), records.len(), "Every record should be picked");
        for (name, count) in &seen {
            assert!(
                (700..1300).contains(count),
                "{} picked {} times out of {}",
                name,
                count,
                trials
            );
        }
        assert_eq!(cache.tracker().total(), trials as u64);
    }

    #[tokio::test]
    async fn test_clear_resets_cache_but_not_counters() {
        let (cache, provider, _clock) = create_test_cache(builtin_catalog());

        cache.get_by_name("Mandrill").await;
        cache.clear();

        assert!(!cache.is_valid());
        assert!(cache.last_refresh().is_none());
        assert_eq!(cache.tracker().count("Mandrill"), 1);

        cache.get_all().await;
        assert_eq!(provider.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_is_server_available_follows_provider() {
        let (cache, provider, _clock) = create_test_cache(builtin_catalog());
        assert!(cache.is_server_available().await);

        provider.set_failing(true);
        assert!(!cache.is_server_available().await);
    }

    #[tokio::test]
    async fn test_statistics_over_served_records() {
        let (cache, _provider, _clock) = create_test_cache(builtin_catalog());
        let stats = cache.statistics().await;
        assert_eq!(stats.total_species, 13);
    }

    #[tokio::test]
    async fn test_concurrent_misses_fetch_once() {
        let provider = Arc::new(
            StaticProvider::new().with_delay(StdDuration::from_millis(20), StdDuration::ZERO),
        );
        let cache = Arc::new(RecordCache::new(provider.clone(), CacheConfig::default()));

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let cache = Arc::clone(&cache);
                tokio::spawn(async move { cache.get_all().await.len() })
            })
            .collect();

        for result in futures::future::join_all(handles).await {
            assert_eq!(result.unwrap(), 13);
        }
        assert_eq!(provider.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_shared_tracker() {
        let tracker = Arc::new(AccessTracker::new());
        let provider = Arc::new(StaticProvider::new().instant());
        let cache =
            RecordCache::new(provider, CacheConfig::default()).with_tracker(Arc::clone(&tracker));

        cache.get_by_name("henry").await;
        assert_eq!(tracker.count("Henry"), 1);
    }
}
