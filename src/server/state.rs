//! Server shared state
//!
//! Holds configuration and the pipeline entry points for the HTTP server.

use crate::config::Config;
use crate::geo;
use crate::geo::cache::CachedGeocoder;
use crate::geo::nominatim::NominatimClient;
use crate::geo::Geocoder;
use crate::marker::TraceSurface;
use crate::pipeline::{Orchestrator, SearchController};
use std::sync::Arc;

/// The geocoding backend shared by both flows
pub type SharedGeocoder = Arc<CachedGeocoder<NominatimClient>>;

/// Shared state for the HTTP server
///
/// Generic over the geocoder so handler tests can run against a scripted
/// backend; production uses [`SharedGeocoder`].
pub struct AppState<G: Geocoder = SharedGeocoder> {
    /// Configuration snapshot taken at startup
    pub config: Config,

    /// The calculation flow; owns the marker registry
    pub orchestrator: Orchestrator<G, TraceSurface>,

    /// The one-shot search flow
    pub search: SearchController<G>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        let geocoder: SharedGeocoder = Arc::new(geo::get_geocoder(&config));
        Self::with_geocoder(config, geocoder)
    }
}

impl<G: Geocoder + Clone> AppState<G> {
    /// Create application state over a specific geocoding backend
    pub fn with_geocoder(config: Config, geocoder: G) -> Self {
        Self {
            orchestrator: Orchestrator::new(geocoder.clone(), TraceSurface::default()),
            search: SearchController::new(geocoder),
            config,
        }
    }
}
