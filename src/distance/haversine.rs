//! Great-circle distance on a spherical Earth.

/// Mean Earth radius used for all distances, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates given in degrees.
///
/// ```text
/// a = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)
/// d = 2R · atan2(√a, √(1 − a))
/// ```
///
/// # Examples
///
/// ```
/// use u_tour::distance::haversine_km;
///
/// // Paris to London, roughly 343 km
/// let d = haversine_km(48.8566, 2.3522, 51.5074, -0.1278);
/// assert!((d - 343.5).abs() < 1.0);
/// assert_eq!(haversine_km(10.0, 20.0, 10.0, 20.0), 0.0);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_degree_latitude() {
        let d = haversine_km(0.0, 0.0, 1.0, 0.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
        assert!((d - expected).abs() < 1e-9);
    }

    #[test]
    fn test_antipodal() {
        let d = haversine_km(0.0, 0.0, 0.0, 180.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI;
        assert!((d - expected).abs() < 1e-6);
    }

    #[test]
    fn test_symmetric_within_tolerance() {
        let ab = haversine_km(37.7749, -122.4194, 34.0522, -118.2437);
        let ba = haversine_km(34.0522, -118.2437, 37.7749, -122.4194);
        assert!((ab - ba).abs() < 1e-9);
        assert!((ab - 559.0).abs() < 1.0);
    }

    #[test]
    fn test_longitude_shrinks_with_latitude() {
        let equator = haversine_km(0.0, 0.0, 0.0, 1.0);
        let north = haversine_km(60.0, 0.0, 60.0, 1.0);
        assert!(north < equator);
        assert!((north - equator * 0.5).abs() < 0.01);
    }
}
