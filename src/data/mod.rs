//! Core data models for Monkeydex
//!
//! This module contains the record type served by every provider, the
//! coordinate value object used for distance calculations, and the providers
//! that know how to fetch records from a remote or built-in source.

pub mod catalog;
pub mod http;
pub mod provider;
pub mod static_provider;

pub use catalog::{builtin_catalog, fallback_catalog};
pub use http::HttpProvider;
pub use provider::{ProviderError, RecordProvider};
pub use static_provider::StaticProvider;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Population below which a species is counted as endangered
pub const ENDANGERED_THRESHOLD: u64 = 2000;

/// Mean radius of the Earth in kilometres
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A single catalog entry
///
/// Field names follow the remote payload, which uses PascalCase keys
/// (`Name`, `Location`, `Image`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    /// Unique name of the species (lookups ignore case)
    pub name: String,
    /// Region where the species lives
    pub location: String,
    /// Free-text description
    pub details: String,
    /// URL of a picture
    #[serde(rename = "Image")]
    pub image_ref: String,
    /// Estimated population
    pub population: u64,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Record {
    /// Returns the record's position as a coordinate pair
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Whether the population is below [`ENDANGERED_THRESHOLD`]
    pub fn is_endangered(&self) -> bool {
        self.population < ENDANGERED_THRESHOLD
    }

    /// Case-insensitive comparison against the record name
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} (population: {})",
            self.name, self.location, self.population
        )
    }
}

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in kilometres (haversine formula)
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
