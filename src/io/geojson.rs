//! GeoJSON route export.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};

use super::LoadError;
use crate::models::Point;

/// Renders a route as a GeoJSON `FeatureCollection` holding one
/// `LineString`.
///
/// Coordinates are `[longitude, latitude]` pairs in visiting order, so a
/// closed route repeats its first coordinate at the end.
///
/// # Panics
///
/// Panics if `order` contains an index outside `points`.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::io::route_geojson;
///
/// let points = vec![Point::new("A", 52.5, 13.4), Point::new("B", 48.1, 11.6)];
/// let doc = route_geojson(&points, &[0, 1]);
/// assert_eq!(doc["type"], "FeatureCollection");
/// assert_eq!(doc["features"][0]["geometry"]["coordinates"][0][0], 13.4);
/// ```
pub fn route_geojson(points: &[Point], order: &[usize]) -> Value {
    let coordinates: Vec<[f64; 2]> = order
        .iter()
        .map(|&i| [points[i].longitude(), points[i].latitude()])
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": coordinates,
            },
            "properties": { "name": "Optimal Tour" },
        }],
    })
}

/// Writes a GeoJSON document to `path`.
///
/// # Errors
///
/// [`LoadError::Json`] if serialization fails, [`LoadError::Io`] if the
/// file cannot be written.
pub fn write_geojson(path: impl AsRef<Path>, doc: &Value) -> Result<(), LoadError> {
    let path = path.as_ref();
    let body = serde_json::to_string(doc)?;
    fs::write(path, body).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<Point> {
        vec![
            Point::new("A", 1.0, 10.0),
            Point::new("B", 2.0, 20.0),
            Point::new("C", 3.0, 30.0),
        ]
    }

    #[test]
    fn test_route_geojson_shape() {
        let doc = route_geojson(&points(), &[2, 0, 1]);
        let feature = &doc["features"][0];
        assert_eq!(feature["type"], "Feature");
        assert_eq!(feature["geometry"]["type"], "LineString");
        assert_eq!(feature["properties"]["name"], "Optimal Tour");
        assert_eq!(
            feature["geometry"]["coordinates"],
            json!([[30.0, 3.0], [10.0, 1.0], [20.0, 2.0]])
        );
    }

    #[test]
    fn test_route_geojson_closed_route() {
        let doc = route_geojson(&points(), &[0, 1, 2, 0]);
        let coords = doc["features"][0]["geometry"]["coordinates"]
            .as_array()
            .expect("array");
        assert_eq!(coords.len(), 4);
        assert_eq!(coords[0], coords[3]);
    }

    #[test]
    fn test_write_geojson() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("route.geojson");
        let doc = route_geojson(&points(), &[0, 1, 2]);
        write_geojson(&path, &doc).expect("writable");

        let text = std::fs::read_to_string(&path).expect("readable");
        let back: Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(back, doc);
    }

    #[test]
    fn test_write_geojson_bad_dir() {
        let doc = route_geojson(&points(), &[0]);
        let err = write_geojson("/nonexistent/dir/route.geojson", &doc).expect_err("bad path");
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
