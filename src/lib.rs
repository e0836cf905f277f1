//! Monkeydex Library
//!
//! The record cache, access tracker and statistics that back the Monkeydex
//! terminal browser, exposed for the binary and for integration tests.

pub mod app;
pub mod cache;
pub mod cli;
pub mod data;
pub mod logging;
pub mod stats;
pub mod tracker;
pub mod ui;

pub use cache::{CacheConfig, CacheError, RecordCache};
pub use data::{Coordinates, ProviderError, Record, RecordProvider};
pub use stats::{summarize, Statistics};
pub use tracker::AccessTracker;
