//! Great-circle distance
//!
//! Haversine formula over a spherical Earth model. This is the only
//! computation in the pipeline; everything else is I/O and bookkeeping.

use crate::constants::geo::EARTH_RADIUS_KM;
use crate::geo::ResolvedLocation;
use std::f64::consts::PI;

/// Calculate the great-circle distance between two points in kilometers
///
/// Symmetric in its arguments; identical points yield 0.0. Pure function:
/// no side effects, no shared state.
pub fn haversine_km(a: &ResolvedLocation, b: &ResolvedLocation) -> f64 {
    let lat1 = a.latitude * PI / 180.0;
    let lat2 = b.latitude * PI / 180.0;
    let delta_lat = (b.latitude - a.latitude) * PI / 180.0;
    let delta_lon = (b.longitude - a.longitude) * PI / 180.0;

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn nyc() -> ResolvedLocation {
        ResolvedLocation::new(40.7128, -74.0060)
    }

    fn la() -> ResolvedLocation {
        ResolvedLocation::new(34.0522, -118.2437)
    }

    #[test]
    fn test_nyc_to_la() {
        // ~3936 km on the spherical model
        let distance = haversine_km(&nyc(), &la());
        assert!(
            (distance - 3936.0).abs() < 5.0,
            "Distance {} should be approximately 3936 km",
            distance
        );
    }

    #[test]
    fn test_symmetric() {
        let ab = haversine_km(&nyc(), &la());
        let ba = haversine_km(&la(), &nyc());
        assert_relative_eq!(ab, ba, max_relative = 1e-6);
    }

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(haversine_km(&nyc(), &nyc()), 0.0);
        let origin = ResolvedLocation::new(0.0, 0.0);
        assert_eq!(haversine_km(&origin, &origin), 0.0);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        // One degree of latitude is ~111 km everywhere
        let a = ResolvedLocation::new(40.0, -74.0);
        let b = ResolvedLocation::new(41.0, -74.0);
        let distance = haversine_km(&a, &b);
        assert!(
            (distance - 111.0).abs() < 1.0,
            "Distance {} should be approximately 111 km",
            distance
        );
    }

    #[test]
    fn test_antipodes() {
        // Half the Earth's circumference, ~20015 km
        let a = ResolvedLocation::new(0.0, 0.0);
        let b = ResolvedLocation::new(0.0, 180.0);
        let distance = haversine_km(&a, &b);
        assert!(
            (distance - 20015.0).abs() < 5.0,
            "Distance {} should be approximately 20015 km",
            distance
        );
    }
}
