//! Geocoding module
//!
//! Turns free-text location queries into coordinates via an external
//! geocoding service.

pub mod cache;
pub mod nominatim;

use crate::config::Config;
use serde::{Deserialize, Serialize};

/// A location resolved from a query
///
/// Immutable once produced; a changed query always yields a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Display name (address or description), when the service provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl ResolvedLocation {
    /// Create a resolved location without a display name
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            display_name: None,
        }
    }

    /// Create a resolved location with a display name
    pub fn named(latitude: f64, longitude: f64, display_name: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            display_name: Some(display_name.into()),
        }
    }
}

/// Outcome of resolving a single query
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionOutcome {
    /// The service returned at least one match; this is the first
    Resolved(ResolvedLocation),
    /// The service returned zero matches (or the query was empty)
    NotFound,
    /// Network error or malformed payload
    TransportFailure(String),
}

impl ResolutionOutcome {
    /// Convert into a crate result, attributing failures to `query`
    pub fn into_result(self, query: &str) -> crate::error::Result<ResolvedLocation> {
        match self {
            Self::Resolved(location) => Ok(location),
            Self::NotFound => Err(crate::error::Error::NotFound(query.to_string())),
            Self::TransportFailure(reason) => Err(crate::error::Error::Transport(reason)),
        }
    }
}

/// Trait for geocoding backends
pub trait Geocoder: Send + Sync {
    /// Resolve a location query to coordinates
    ///
    /// A single attempt: no retries, and identical queries issue a fresh
    /// lookup each time unless the caller wraps the backend in a cache.
    fn resolve(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = ResolutionOutcome> + Send;
}

impl<G: Geocoder> Geocoder for std::sync::Arc<G> {
    fn resolve(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = ResolutionOutcome> + Send {
        G::resolve(self, query)
    }
}

/// Build the configured geocoding backend
///
/// Wraps the Nominatim client in a bounded cache; with the default
/// `geocoder.cache_size = 0` the wrapper is a pass-through and every call
/// hits the live service.
pub fn get_geocoder(config: &Config) -> cache::CachedGeocoder<nominatim::NominatimClient> {
    cache::CachedGeocoder::new(
        nominatim::NominatimClient::from_config(&config.geocoder),
        config.geocoder.cache_size,
    )
}
