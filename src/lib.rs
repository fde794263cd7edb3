//! geospan: Geocoded Distance Calculator
//!
//! A library and CLI tool for resolving free-text locations to coordinates
//! via OpenStreetMap Nominatim and measuring the great-circle distance
//! between them.
//!
//! ## Features
//!
//! - Nominatim geocoding with an optional bounded cache
//! - Haversine distance over a spherical Earth
//! - Slot-keyed marker registry driving a pluggable map surface
//! - Supersession-safe calculation pipeline
//! - HTTP API + web map + CLI interface
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use geospan::distance::haversine_km;
//! use geospan::geo::ResolvedLocation;
//!
//! let nyc = ResolvedLocation::new(40.7128, -74.0060);
//! let la = ResolvedLocation::new(34.0522, -118.2437);
//!
//! let km = haversine_km(&nyc, &la);
//! println!("NYC to LA: {:.0} km", km);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod distance;
pub mod error;
pub mod geo;
pub mod marker;
pub mod pipeline;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use geo::{Geocoder, ResolutionOutcome, ResolvedLocation};
pub use marker::{Marker, MarkerSlot};
pub use pipeline::{DistanceResult, Orchestrator, SearchController};
