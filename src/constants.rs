//! Centralized constants for the geospan crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in kilometers (spherical approximation)
    pub const EARTH_RADIUS_KM: f64 = 6371.0;
}

/// External API endpoints
pub mod api {
    /// OpenStreetMap Nominatim geocoding API
    pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

    /// User-Agent sent to Nominatim (required by their usage policy)
    pub const USER_AGENT: &str = concat!("geospan/", env!("CARGO_PKG_VERSION"));
}

/// Map tile rendering defaults (consumed by the web frontend)
pub mod tiles {
    /// OpenStreetMap raster tile template
    pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

    /// Attribution string required by the OSM tile usage policy
    pub const OSM_ATTRIBUTION: &str =
        "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
}
