//! CSV point loading.
//!
//! Expected layout: one header row, then `name, lat, lon` per record.
//! Columns are read by position, so header names are free-form.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use super::LoadError;
use crate::models::Point;

/// Loads points from a CSV file.
///
/// Reading stops after `limit` records when given; `Some(0)` means no
/// limit.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be opened, [`LoadError::Csv`] for a
/// record that is not `name, lat, lon` with numeric coordinates.
pub fn load_points(path: impl AsRef<Path>, limit: Option<usize>) -> Result<Vec<Point>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let points = read_points(file, limit)?;
    debug!("loaded {} points from {}", points.len(), path.display());
    Ok(points)
}

/// Reads points from any CSV source.
///
/// # Examples
///
/// ```
/// use u_tour::io::read_points;
///
/// let data = "name,lat,lon\nHome,52.52,13.40\nOffice,52.50,13.45\n";
/// let points = read_points(data.as_bytes(), None).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[1].name(), "Office");
/// ```
pub fn read_points<R: Read>(reader: R, limit: Option<usize>) -> Result<Vec<Point>, LoadError> {
    let limit = limit.filter(|&l| l > 0).unwrap_or(usize::MAX);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut points = Vec::new();
    for record in reader.deserialize::<(String, f64, f64)>().take(limit) {
        let (name, lat, lon) = record?;
        points.push(Point::new(name, lat, lon));
    }
    Ok(points)
}

/// Returns the index of the first point named exactly `name`.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::io::find_start;
///
/// let points = vec![Point::new("A", 0.0, 0.0), Point::new("B", 1.0, 1.0)];
/// assert_eq!(find_start(&points, "B"), Some(1));
/// assert_eq!(find_start(&points, "b"), None);
/// ```
pub fn find_start(points: &[Point], name: &str) -> Option<usize> {
    points.iter().position(|p| p.name() == name)
}
