//! Per-record access counters
//!
//! Counts how often each record has been resolved through a name lookup or
//! a random pick, and ranks records by popularity.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

/// Number of entries returned by [`AccessTracker::top`] when no count is given
pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, Copy)]
struct Counter {
    count: u64,
    /// Position in first-access order, used to break ties
    order: u64,
}

#[derive(Debug, Default)]
struct Counters {
    entries: HashMap<String, Counter>,
    next_order: u64,
}

/// Thread-safe access counter keyed by canonical record name
///
/// Keys are stored exactly as given; callers pass the record's stored name,
/// not the user's input.
#[derive(Debug, Default)]
pub struct AccessTracker {
    inner: Mutex<Counters>,
}

impl AccessTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Counters> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds one to the counter for `key`, starting at 1 for a new key
    pub fn increment(&self, key: &str) {
        let mut counters = self.lock();
        let order = counters.next_order;
        let counter = counters
            .entries
            .entry(key.to_string())
            .or_insert(Counter { count: 0, order });
        counter.count += 1;
        let count = counter.count;
        if count == 1 {
            counters.next_order += 1;
        }
        debug!(key, count, "access recorded");
    }

    /// Current count for `key`, 0 if it was never accessed
    pub fn count(&self, key: &str) -> u64 {
        self.lock().entries.get(key).map_or(0, |c| c.count)
    }

    /// Copy of all counters
    pub fn snapshot(&self) -> HashMap<String, u64> {
        self.lock()
            .entries
            .iter()
            .map(|(name, counter)| (name.clone(), counter.count))
            .collect()
    }

    /// The `n` most accessed records, highest count first
    ///
    /// Equal counts keep the order in which the records were first accessed.
    pub fn top_n(&self, n: usize) -> Vec<(String, u64)> {
        let counters = self.lock();
        let mut ranked: Vec<(&String, &Counter)> = counters.entries.iter().collect();
        ranked.sort_by(|(_, a), (_, b)| b.count.cmp(&a.count).then(a.order.cmp(&b.order)));
        ranked
            .into_iter()
            .take(n)
            .map(|(name, counter)| (name.clone(), counter.count))
            .collect()
    }

    /// [`top_n`](Self::top_n) with [`DEFAULT_TOP_N`] entries
    pub fn top(&self) -> Vec<(String, u64)> {
        self.top_n(DEFAULT_TOP_N)
    }

    /// Sum of all counters
    pub fn total(&self) -> u64 {
        self.lock().entries.values().map(|c| c.count).sum()
    }

    /// Average count per distinct record, 0.0 when nothing was accessed
    pub fn mean(&self) -> f64 {
        let counters = self.lock();
        if counters.entries.is_empty() {
            return 0.0;
        }
        let total: u64 = counters.entries.values().map(|c| c.count).sum();
        total as f64 / counters.entries.len() as f64
    }

    /// Number of distinct records accessed
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Removes every counter
    pub fn clear(&self) {
        let mut counters = self.lock();
        counters.entries.clear();
        counters.next_order = 0;
        debug!("access counters cleared");
    }
}
