//! Coordinates and great-circle geometry
//!
//! Everything here works in degrees of latitude/longitude and meters of
//! arc distance on a sphere whose radius the caller supplies from
//! [`GameConfig`](crate::core::config::GameConfig), so every subsystem
//! measures with the same Earth.

use crate::core::error::{GameError, Result};

/// A validated point on the globe
///
/// Construction is the only gate: once a `Coordinate` exists its latitude
/// is within [-90, 90] and its longitude within [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting out-of-range (or NaN) components.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GameError::InvalidLatitude(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(GameError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in degrees
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// Great-circle distance between two coordinates, in meters.
pub fn distance(a: Coordinate, b: Coordinate, radius_m: f64) -> f64 {
    haversine_m(a.lat, a.lon, b.lat, b.lon, radius_m)
}

/// Haversine distance over raw degree pairs, in meters.
///
/// Inputs need not be valid coordinates: the motion primitives measure
/// against transient probe points (a one-degree step can poke past a pole
/// or the antimeridian) and only final placements get validated.
pub fn haversine_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64, radius_m: f64) -> f64 {
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).to_radians().sin().powi(2)
        + lat1.to_radians().cos()
            * lat2.to_radians().cos()
            * (dlon / 2.0).to_radians().sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    radius_m * c
}

/// Coordinate-space midpoint of two points.
///
/// Averages latitude and longitude directly rather than bisecting the
/// geodesic. The averages of in-range components stay in range, so this
/// cannot fail.
pub fn midpoint(a: Coordinate, b: Coordinate) -> Coordinate {
    Coordinate {
        lat: a.lat + (b.lat - a.lat) / 2.0,
        lon: a.lon + (b.lon - a.lon) / 2.0,
    }
}

/// A raw degree pair roughly `distance_m` meters from (`lat`, `lon`) along
/// `bearing_rad`.
///
/// Takes a one-degree probe step along the bearing, measures the probe's
/// true arc length, then scales the degree delta to cover the requested
/// distance. This keeps the offset honest at high latitudes, where a
/// degree of longitude is far shorter than a degree of latitude.
pub fn point_at(lat: f64, lon: f64, bearing_rad: f64, distance_m: f64, radius_m: f64) -> (f64, f64) {
    let dlat = bearing_rad.sin();
    let dlon = bearing_rad.cos();
    let probe_m = haversine_m(lat, lon, lat + dlat, lon + dlon, radius_m);
    let scale = distance_m / probe_m;
    (lat + dlat * scale, lon + dlon * scale)
}

/// Move `travel_m` meters from `from` toward a raw target point.
///
/// Interpolates in coordinate space: the degree delta is scaled by
/// travel over current arc distance. Standing on the target is a no-op.
/// Fails only when the landing point leaves the valid range, which a
/// capped step toward a valid coordinate never does.
pub fn step_toward(
    from: Coordinate,
    target_lat: f64,
    target_lon: f64,
    travel_m: f64,
    radius_m: f64,
) -> Result<Coordinate> {
    let current_m = haversine_m(from.lat, from.lon, target_lat, target_lon, radius_m);
    if current_m <= 0.0 {
        return Ok(from);
    }
    let scale = travel_m / current_m;
    Coordinate::new(
        from.lat + (target_lat - from.lat) * scale,
        from.lon + (target_lon - from.lon) * scale,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADIUS: f64 = 6_378_100.0;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn test_coordinate_ranges() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(matches!(
            Coordinate::new(90.1, 0.0),
            Err(GameError::InvalidLatitude(_))
        ));
        assert!(matches!(
            Coordinate::new(0.0, -180.5),
            Err(GameError::InvalidLongitude(_))
        ));
        assert!(
            Coordinate::new(f64::NAN, 0.0).is_err(),
            "NaN latitude must not validate"
        );
    }

    #[test]
    fn test_distance_zero_for_same_point() {
        let a = coord(37.422, -122.084);
        assert_eq!(distance(a, a, RADIUS), 0.0);
    }

    #[test]
    fn test_distance_one_degree_at_equator() {
        let d = distance(coord(0.0, 0.0), coord(0.0, 1.0), RADIUS);
        // One degree of arc on this sphere is about 111.32 km
        assert!(
            (d - 111_319.5).abs() < 1.0,
            "expected ~111319.5 m, got {d}"
        );
    }

    #[test]
    fn test_distance_symmetric() {
        let a = coord(40.0, -74.0);
        let b = coord(48.85, 2.35);
        let ab = distance(a, b, RADIUS);
        let ba = distance(b, a, RADIUS);
        assert!((ab - ba).abs() < 1e-6, "expected symmetry, {ab} vs {ba}");
    }

    #[test]
    fn test_midpoint_averages_components() {
        let m = midpoint(coord(10.0, 20.0), coord(20.0, 40.0));
        assert_eq!(m.lat(), 15.0);
        assert_eq!(m.lon(), 30.0);
    }

    #[test]
    fn test_point_at_lands_at_requested_distance() {
        let (lat, lon) = point_at(45.0, 10.0, 1.2, 500.0, RADIUS);
        let d = haversine_m(45.0, 10.0, lat, lon, RADIUS);
        assert!(
            (d - 500.0).abs() < 1.0,
            "expected ~500 m offset, got {d}"
        );
    }

    #[test]
    fn test_point_at_zero_distance_stays_put() {
        let (lat, lon) = point_at(10.0, 10.0, 0.7, 0.0, RADIUS);
        assert_eq!((lat, lon), (10.0, 10.0));
    }

    #[test]
    fn test_step_toward_partial_step() {
        let from = coord(0.0, 0.0);
        let d_target = haversine_m(0.0, 0.0, 0.0, 0.001, RADIUS);
        let next = step_toward(from, 0.0, 0.001, d_target / 2.0, RADIUS).unwrap();
        let travelled = distance(from, next, RADIUS);
        assert!(
            (travelled - d_target / 2.0).abs() < 0.01,
            "expected half the gap, travelled {travelled}"
        );
    }

    #[test]
    fn test_step_toward_zero_gap_is_noop() {
        let from = coord(12.0, 34.0);
        let next = step_toward(from, 12.0, 34.0, 99.0, RADIUS).unwrap();
        assert_eq!(next, from);
    }

    #[test]
    fn test_step_toward_rejects_leaving_valid_range() {
        let from = coord(89.99, 0.0);
        // Overshooting the target far past the pole must fail, not clamp
        let result = step_toward(from, 91.0, 0.0, 1_000_000.0, RADIUS);
        assert!(matches!(result, Err(GameError::InvalidLatitude(_))));
    }
}
