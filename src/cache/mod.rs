//! Cache module mediating between callers and the record provider
//!
//! This module provides a record cache that keeps the catalog in memory for a
//! configurable validity window. It supports graceful degradation by serving
//! a fallback dataset when the provider is unavailable, without letting that
//! fallback replace the cached state.

mod clock;
mod manager;

pub use clock::{Clock, ManualClock, SystemClock};
pub use manager::{CacheConfig, CacheError, RecordCache, DEFAULT_EXPIRY_MINUTES};
