//! Geographic point type.

use crate::distance::haversine_km;

/// A named location given in degrees.
///
/// Latitude is expected in `[-90, 90]` and longitude in `[-180, 180]`.
/// Ranges are not checked; callers supply valid coordinates.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
///
/// let p = Point::new("Depot", 52.52, 13.405);
/// assert_eq!(p.name(), "Depot");
/// assert_eq!(p.latitude(), 52.52);
/// assert_eq!(p.longitude(), 13.405);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    name: String,
    latitude: f64,
    longitude: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Display name of this point.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another point, in kilometers.
    pub fn distance_to(&self, other: &Point) -> f64 {
        haversine_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}
